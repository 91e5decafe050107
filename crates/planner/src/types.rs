use crate::normalize::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One recipe from the corpus, immutable for the duration of a planning run.
///
/// Titles should be unique within the corpus but duplicates are legal; each
/// corpus entry is treated as its own candidate either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    /// Raw ingredient names as stored; normalized at scoring time.
    pub required_ingredients: Vec<String>,
    pub prep_minutes: u32,
    pub cook_minutes: u32,
    pub contains_meat_or_fish: bool,
    pub source_url: String,
}

impl RecipeRecord {
    pub fn total_minutes(&self) -> u32 {
        self.prep_minutes + self.cook_minutes
    }
}

/// The set of ingredients the user currently owns, held in normalized form.
///
/// Category grouping from the selection surface is cosmetic and discarded
/// here; scoring only ever sees the flat set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySet {
    owned: BTreeSet<String>,
}

impl InventorySet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned = names
            .into_iter()
            .map(|name| normalize_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        InventorySet { owned }
    }

    /// Flatten a categorized inventory snapshot, discarding the grouping.
    pub fn from_categorized(groups: &BTreeMap<String, Vec<String>>) -> Self {
        Self::from_names(groups.values().flatten())
    }

    /// Whether the raw name, after normalization, is owned.
    pub fn owns(&self, raw: &str) -> bool {
        self.owned.contains(&normalize_name(raw))
    }

    pub(crate) fn contains_normalized(&self, normalized: &str) -> bool {
        self.owned.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.owned.iter().map(String::as_str)
    }
}

/// A recipe paired with the ingredients the inventory does not cover.
///
/// Borrows its record from the corpus slice; plan slots reference recipe
/// data, they never copy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a RecipeRecord,
    /// Normalized names required by the recipe but absent from the inventory.
    pub missing_ingredients: BTreeSet<String>,
}

impl ScoredRecipe<'_> {
    pub fn missing_count(&self) -> usize {
        self.missing_ingredients.len()
    }
}

/// An ordered N-day menu, one scored recipe per day slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPlan<'a> {
    pub days: Vec<ScoredRecipe<'a>>,
}

impl MenuPlan<'_> {
    pub fn horizon(&self) -> usize {
        self.days.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_normalizes_on_construction() {
        let inventory = InventorySet::from_names([" Tomato ", "OLIVE  OIL", "tomato"]);
        assert_eq!(inventory.len(), 2);
        assert!(inventory.owns("tomato"));
        assert!(inventory.owns("Olive Oil"));
        assert!(!inventory.owns("garlic"));
    }

    #[test]
    fn test_inventory_drops_blank_names() {
        let inventory = InventorySet::from_names(["", "   ", "salt"]);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_from_categorized_flattens_groups() {
        let mut groups = BTreeMap::new();
        groups.insert("Produce".to_string(), vec!["Tomato".to_string(), "Basil".to_string()]);
        groups.insert("Dairy".to_string(), vec!["Milk".to_string()]);

        let inventory = InventorySet::from_categorized(&groups);

        assert_eq!(inventory.len(), 3);
        assert!(inventory.owns("tomato"));
        assert!(inventory.owns("milk"));
    }

    #[test]
    fn test_total_minutes() {
        let recipe = RecipeRecord {
            title: "Soup".to_string(),
            required_ingredients: vec!["leek".to_string()],
            prep_minutes: 10,
            cook_minutes: 25,
            contains_meat_or_fish: false,
            source_url: String::new(),
        };
        assert_eq!(recipe.total_minutes(), 35);
    }
}
