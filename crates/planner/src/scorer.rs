use crate::error::PlanningError;
use crate::normalize::normalize_name;
use crate::types::{InventorySet, RecipeRecord, ScoredRecipe};
use std::collections::BTreeSet;

/// Score every recipe against the inventory, one output per input, order
/// preserved.
///
/// A recipe's missing set is the normalized set difference between its
/// required ingredients and the owned ingredients; both sides go through the
/// same normalization, so `" Tomato "` in a recipe matches `"tomato"` in the
/// inventory. Pure and deterministic: identical inputs always yield identical
/// missing sets.
///
/// Fails with [`PlanningError::MalformedRecipe`] on a recipe with no required
/// ingredients (or only blank names) rather than silently scoring it as
/// fully stocked.
pub fn score<'a>(
    recipes: &'a [RecipeRecord],
    inventory: &InventorySet,
) -> Result<Vec<ScoredRecipe<'a>>, PlanningError> {
    recipes
        .iter()
        .map(|recipe| score_one(recipe, inventory))
        .collect()
}

fn score_one<'a>(
    recipe: &'a RecipeRecord,
    inventory: &InventorySet,
) -> Result<ScoredRecipe<'a>, PlanningError> {
    if recipe.required_ingredients.is_empty() {
        return Err(PlanningError::MalformedRecipe {
            title: recipe.title.clone(),
            reason: "required ingredient list is empty".to_string(),
        });
    }

    let mut missing_ingredients = BTreeSet::new();
    let mut named = 0usize;

    for raw in &recipe.required_ingredients {
        let name = normalize_name(raw);
        if name.is_empty() {
            continue;
        }
        named += 1;
        if !inventory.contains_normalized(&name) {
            missing_ingredients.insert(name);
        }
    }

    if named == 0 {
        return Err(PlanningError::MalformedRecipe {
            title: recipe.title.clone(),
            reason: "required ingredient list holds only blank names".to_string(),
        });
    }

    Ok(ScoredRecipe {
        recipe,
        missing_ingredients,
    })
}
