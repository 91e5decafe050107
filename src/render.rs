use pantryplan_planner::{NarrationStatus, PlanArtifact};
use std::collections::BTreeMap;

/// Render a plan artifact as a markdown document, one table row per day.
///
/// The narration text, when complete, is appended verbatim; an incomplete
/// narration gets an explicit note instead, since the structured plan is
/// still valid on its own.
pub fn plan_markdown(artifact: &PlanArtifact) -> String {
    let mut out = String::from("# Weekly Meal Plan\n\n");

    if let Some(generated_at) = &artifact.generated_at {
        out.push_str(&format!("_Generated: {generated_at}_\n\n"));
    }

    out.push_str("| Day | Dish | To buy | Prep | Cook |\n");
    out.push_str("| :-- | :-- | :-- | --: | --: |\n");
    for day in &artifact.days {
        let dish = if day.source_url.is_empty() {
            day.title.clone()
        } else {
            format!("[{}]({})", day.title, day.source_url)
        };
        let to_buy = if day.missing_ingredients.is_empty() {
            "—".to_string()
        } else {
            day.missing_ingredients.join(", ")
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} min | {} min |\n",
            day.day, dish, to_buy, day.prep_minutes, day.cook_minutes
        ));
    }

    out.push_str("\n## Menu Notes\n\n");
    match &artifact.narration {
        NarrationStatus::Complete { text } => out.push_str(text),
        NarrationStatus::Incomplete { error } => {
            out.push_str(&format!(
                "_Narration unavailable ({error}). The plan above is complete._"
            ));
        }
    }
    out.push('\n');

    out
}

/// Render the shopping list: every ingredient still to buy across the plan,
/// grouped by the supplied categorization, one section per non-empty
/// category. Ingredients the categorization does not mention land under
/// "Other".
pub fn shopping_list_markdown(
    artifact: &PlanArtifact,
    categories: &BTreeMap<String, Vec<String>>,
) -> String {
    let mut to_buy: Vec<&str> = artifact
        .days
        .iter()
        .flat_map(|day| day.missing_ingredients.iter())
        .map(String::as_str)
        .collect();
    to_buy.sort();
    to_buy.dedup();

    let mut sections: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for item in to_buy {
        let category = categories
            .iter()
            .find(|(_, names)| names.iter().any(|name| name == item))
            .map(|(category, _)| category.as_str())
            .unwrap_or("Other");
        sections.entry(category).or_default().push(item);
    }

    let mut out = String::from("# Shopping List\n");
    for (category, items) in sections {
        out.push_str(&format!("\n## {category}\n\n"));
        for item in items {
            out.push_str(&format!("- {item}\n"));
        }
    }
    out
}
