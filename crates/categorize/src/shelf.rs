use crate::{CategorizeError, IngredientCategorizer};
use async_trait::async_trait;
use pantryplan_planner::normalize_name;
use std::collections::BTreeMap;

/// Offline rule-based categorizer.
///
/// Groups ingredients into grocery-store shelves from a predefined mapping;
/// anything unrecognized lands in "Other". Used when no generative service
/// is configured, and as the fallback for one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PantryShelf;

impl PantryShelf {
    /// Shelf name for a single ingredient.
    pub fn shelf_for(name: &str) -> &'static str {
        let name = normalize_name(name);
        let name = name.as_str();

        if is_produce(name) {
            "Produce"
        } else if is_dairy(name) {
            "Dairy & Eggs"
        } else if is_meat_or_fish(name) {
            "Meat & Fish"
        } else if is_frozen(name) {
            "Frozen"
        } else if is_bakery(name) {
            "Bakery"
        } else if is_pantry(name) {
            "Pantry"
        } else {
            "Other"
        }
    }
}

#[async_trait]
impl IngredientCategorizer for PantryShelf {
    async fn categorize(
        &self,
        ingredients: &[String],
    ) -> Result<BTreeMap<String, Vec<String>>, CategorizeError> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for ingredient in ingredients {
            groups
                .entry(Self::shelf_for(ingredient).to_string())
                .or_default()
                .push(ingredient.clone());
        }
        for names in groups.values_mut() {
            names.sort();
            names.dedup();
        }
        Ok(groups)
    }
}

fn is_produce(name: &str) -> bool {
    matches!(
        name,
        "tomato" | "tomatoes"
            | "onion" | "onions"
            | "garlic"
            | "shallot" | "shallots"
            | "leek" | "leeks"
            | "carrot" | "carrots"
            | "celery"
            | "courgette" | "zucchini"
            | "aubergine" | "eggplant"
            | "bell pepper" | "bell peppers"
            | "potato" | "potatoes"
            | "sweet potato"
            | "mushroom" | "mushrooms"
            | "spinach"
            | "kale"
            | "cabbage"
            | "lettuce"
            | "cucumber"
            | "broccoli"
            | "cauliflower"
            | "green beans"
            | "peas"
            | "avocado"
            | "ginger"
            | "lemon" | "lemons"
            | "lime" | "limes"
            | "orange" | "oranges"
            | "apple" | "apples"
            | "banana" | "bananas"
            | "parsley"
            | "basil"
            | "coriander" | "cilantro"
            | "thyme"
            | "rosemary"
            | "mint"
            | "chives"
    )
}

fn is_dairy(name: &str) -> bool {
    matches!(
        name,
        "milk"
            | "butter"
            | "cream"
            | "heavy cream"
            | "creme fraiche"
            | "sour cream"
            | "yogurt" | "greek yogurt"
            | "cheese"
            | "parmesan" | "parmesan cheese"
            | "mozzarella" | "mozzarella cheese"
            | "cheddar" | "cheddar cheese"
            | "feta" | "feta cheese"
            | "goat cheese"
            | "gruyere"
            | "egg" | "eggs"
    )
}

fn is_meat_or_fish(name: &str) -> bool {
    matches!(
        name,
        "chicken" | "chicken breast" | "chicken thighs"
            | "turkey"
            | "duck"
            | "beef" | "ground beef" | "steak"
            | "veal"
            | "pork" | "pork chops"
            | "bacon" | "lardons"
            | "ham"
            | "sausage" | "sausages"
            | "lamb"
            | "fish"
            | "salmon"
            | "tuna"
            | "cod"
            | "trout"
            | "anchovy" | "anchovies"
            | "shrimp" | "prawns"
            | "mussels"
            | "squid"
    )
}

fn is_pantry(name: &str) -> bool {
    matches!(
        name,
        "flour"
            | "sugar" | "brown sugar"
            | "salt"
            | "pepper" | "black pepper"
            | "olive oil"
            | "vegetable oil"
            | "vinegar" | "balsamic vinegar" | "red wine vinegar"
            | "soy sauce"
            | "mustard" | "dijon mustard"
            | "rice" | "basmati rice" | "risotto rice"
            | "pasta" | "spaghetti" | "penne"
            | "couscous"
            | "quinoa"
            | "lentils"
            | "chickpeas"
            | "beans" | "white beans" | "kidney beans" | "black beans"
            | "barley"
            | "oats"
            | "tomato paste"
            | "canned tomatoes" | "crushed tomatoes"
            | "coconut milk"
            | "stock" | "chicken stock" | "vegetable stock" | "beef stock"
            | "honey"
            | "miso"
            | "tofu"
            | "paprika"
            | "cumin"
            | "turmeric"
            | "cinnamon"
            | "nutmeg"
            | "oregano"
            | "bay leaf" | "bay leaves"
            | "saffron"
            | "curry powder"
            | "chili powder"
            | "walnuts"
            | "almonds"
            | "pine nuts"
    )
}

fn is_frozen(name: &str) -> bool {
    matches!(
        name,
        "frozen peas" | "frozen spinach" | "frozen berries" | "puff pastry" | "ice cream"
    )
}

fn is_bakery(name: &str) -> bool {
    matches!(
        name,
        "bread" | "baguette" | "sourdough" | "pita" | "tortillas" | "buns" | "brioche"
    )
}
