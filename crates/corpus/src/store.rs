use crate::error::CorpusError;
use pantryplan_planner::{RecipeRecord, normalize_name};
use std::collections::BTreeSet;
use std::path::Path;

/// Column order of the tabular recipe store.
const HEADER: [&str; 6] = [
    "Title",
    "Key Ingredients",
    "Prep Time (min)",
    "Cook Time (min)",
    "Contains meat/fish?",
    "URL",
];

/// Map the store's meat/fish cell to a flag.
///
/// Historic stores carry the French "Oui"; both it and "Yes" mean true,
/// anything else means false.
pub fn parse_meat_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "oui" | "yes")
}

/// Load the recipe store into core records.
///
/// Rows fail loudly: an empty ingredient cell or an unparseable/negative
/// time value surfaces as [`CorpusError::MalformedRow`] identifying the
/// offending record instead of degrading the corpus silently.
pub fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<RecipeRecord>, CorpusError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut recipes = Vec::new();
    for (offset, row) in reader.records().enumerate() {
        let row = row?;
        let record = offset as u64 + 1;
        let title = row.get(0).unwrap_or_default().to_string();

        let ingredients = split_ingredients(row.get(1).unwrap_or_default());
        if ingredients.is_empty() {
            return Err(CorpusError::MalformedRow {
                title,
                record,
                reason: "ingredient list is empty".to_string(),
            });
        }

        let prep_minutes = parse_minutes(row.get(2).unwrap_or_default(), "prep time", &title, record)?;
        let cook_minutes = parse_minutes(row.get(3).unwrap_or_default(), "cook time", &title, record)?;

        recipes.push(RecipeRecord {
            title,
            required_ingredients: ingredients,
            prep_minutes,
            cook_minutes,
            contains_meat_or_fish: parse_meat_flag(row.get(4).unwrap_or_default()),
            source_url: row.get(5).unwrap_or_default().to_string(),
        });
    }

    tracing::debug!(count = recipes.len(), "recipe store loaded");
    Ok(recipes)
}

/// Append one recipe to the store, creating it with a header row first when
/// the file does not exist yet.
pub fn append_recipe(path: impl AsRef<Path>, recipe: &RecipeRecord) -> Result<(), CorpusError> {
    let path = path.as_ref();
    let write_header = !path.exists();

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if write_header {
        writer.write_record(HEADER)?;
    }
    let ingredients = recipe.required_ingredients.join(", ");
    let prep = recipe.prep_minutes.to_string();
    let cook = recipe.cook_minutes.to_string();
    writer.write_record([
        recipe.title.as_str(),
        ingredients.as_str(),
        prep.as_str(),
        cook.as_str(),
        if recipe.contains_meat_or_fish { "Yes" } else { "No" },
        recipe.source_url.as_str(),
    ])?;
    writer.flush()?;

    Ok(())
}

/// Sorted, deduplicated normalized ingredient names across the corpus.
///
/// Feeds the selection surface (what can be checked off) and the
/// categorization collaborator.
pub fn ingredient_catalog(recipes: &[RecipeRecord]) -> Vec<String> {
    let names: BTreeSet<String> = recipes
        .iter()
        .flat_map(|recipe| recipe.required_ingredients.iter())
        .map(|raw| normalize_name(raw))
        .filter(|name| !name.is_empty())
        .collect();
    names.into_iter().collect()
}

fn split_ingredients(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_minutes(cell: &str, field: &str, title: &str, record: u64) -> Result<u32, CorpusError> {
    let value: i64 = cell.trim().parse().map_err(|_| CorpusError::MalformedRow {
        title: title.to_string(),
        record,
        reason: format!("{field} '{cell}' is not a number"),
    })?;
    u32::try_from(value).map_err(|_| CorpusError::MalformedRow {
        title: title.to_string(),
        record,
        reason: format!("{field} {value} is out of range"),
    })
}
