use pantryplan_categorize::{CategorizeError, IngredientCategorizer};
use pantryplan_narration::NarrationService;
use pantryplan_planner::{
    InventorySet, NarrationStatus, PlanArtifact, PlanningError, RecipeRecord, assemble, finalize,
    score, select,
};
use std::sync::Arc;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A planning failure fatal to the run.
///
/// Narration failures never surface here: they are folded into the artifact
/// as [`NarrationStatus::Incomplete`], so callers can tell "selection
/// failed" (this error) apart from "narration failed" (recoverable).
#[derive(Error, Debug)]
pub enum PlanError {
    #[error(transparent)]
    Planning(#[from] PlanningError),
}

/// One planning surface: holds the narration collaborator and runs the
/// score → select → assemble → narrate → finalize pipeline over immutable
/// snapshots of corpus and inventory.
#[derive(Clone)]
pub struct PlanningSession {
    narrator: Arc<dyn NarrationService>,
}

impl PlanningSession {
    pub fn new(narrator: Arc<dyn NarrationService>) -> Self {
        PlanningSession { narrator }
    }

    /// Plan an N-day menu and narrate it.
    pub async fn plan(
        &self,
        recipes: &[RecipeRecord],
        inventory: &InventorySet,
        days: usize,
    ) -> Result<PlanArtifact, PlanError> {
        let scored = score(recipes, inventory)?;
        let plan = select(&scored, days)?;
        tracing::info!(
            days,
            candidates = scored.len(),
            inventory = inventory.len(),
            "menu selected"
        );

        let request = assemble(&plan);
        let narration = self.narrator.narrate(&request).await;
        if let Err(err) = &narration {
            tracing::warn!(error = %err, "narration failed, artifact flagged incomplete");
        }

        Ok(finalize(&plan, narration).with_timestamp(timestamp()))
    }

    /// Categorized markdown shopping list for everything the plan still
    /// needs bought.
    pub async fn shopping_list(
        &self,
        artifact: &PlanArtifact,
        categorizer: &dyn IngredientCategorizer,
    ) -> Result<String, CategorizeError> {
        let to_buy: Vec<String> = artifact
            .days
            .iter()
            .flat_map(|day| day.missing_ingredients.iter().cloned())
            .collect();
        let categories = categorizer.categorize(&to_buy).await?;
        Ok(crate::render::shopping_list_markdown(artifact, &categories))
    }

    /// Retry narration for a stored artifact without recomputing selection.
    pub async fn renarrate(&self, artifact: &PlanArtifact) -> PlanArtifact {
        let request = artifact.narration_request();
        let narration = match self.narrator.narrate(&request).await {
            Ok(text) => NarrationStatus::Complete { text },
            Err(err) => {
                tracing::warn!(error = %err, "re-narration failed");
                NarrationStatus::Incomplete {
                    error: err.to_string(),
                }
            }
        };

        PlanArtifact {
            days: artifact.days.clone(),
            narration,
            generated_at: artifact.generated_at.clone(),
        }
    }
}

fn timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
