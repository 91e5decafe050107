use crate::types::MenuPlan;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One day of the plan in interchange form: everything the narration service
/// needs to describe the dish, nothing it could use to re-rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBrief {
    /// 1-based day index.
    pub day: usize,
    pub title: String,
    /// Normalized, sorted.
    pub missing_ingredients: Vec<String>,
    pub prep_minutes: u32,
    pub cook_minutes: u32,
    pub contains_meat_or_fish: bool,
    pub source_url: String,
}

/// Structured, already-decided handoff for the external narration service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationRequest {
    pub horizon_days: usize,
    pub days: Vec<DayBrief>,
}

/// Outcome of the narration call as recorded in the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NarrationStatus {
    /// Prose returned by the service, stored verbatim and never interpreted.
    Complete { text: String },
    /// The service failed; the structured plan below is still complete and
    /// can be re-narrated without recomputing selection.
    Incomplete { error: String },
}

/// The final output artifact: the structured plan plus the narration state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanArtifact {
    pub days: Vec<DayBrief>,
    pub narration: NarrationStatus,
    /// RFC 3339 timestamp stamped by the caller; the engine itself is
    /// clock-free.
    #[serde(default)]
    pub generated_at: Option<String>,
}

impl PlanArtifact {
    pub fn narration_complete(&self) -> bool {
        matches!(self.narration, NarrationStatus::Complete { .. })
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.generated_at = Some(timestamp.into());
        self
    }

    /// Rebuild the narration handoff from the stored plan, for retrying
    /// narration without re-selecting.
    pub fn narration_request(&self) -> NarrationRequest {
        NarrationRequest {
            horizon_days: self.days.len(),
            days: self.days.clone(),
        }
    }
}

/// Package a plan for the narration service. Pure transformation; the
/// service receives decided data and day ordering, nothing else.
pub fn assemble(plan: &MenuPlan<'_>) -> NarrationRequest {
    let days = plan
        .days
        .iter()
        .enumerate()
        .map(|(offset, slot)| DayBrief {
            day: offset + 1,
            title: slot.recipe.title.clone(),
            missing_ingredients: slot.missing_ingredients.iter().cloned().collect(),
            prep_minutes: slot.recipe.prep_minutes,
            cook_minutes: slot.recipe.cook_minutes,
            contains_meat_or_fish: slot.recipe.contains_meat_or_fish,
            source_url: slot.recipe.source_url.clone(),
        })
        .collect();

    NarrationRequest {
        horizon_days: plan.horizon(),
        days,
    }
}

/// Pair the structured plan with the narration outcome.
///
/// A narration failure is recoverable: the artifact is flagged incomplete
/// but keeps the full plan, so the caller can retry narration later. The
/// prose, when present, is stored verbatim.
pub fn finalize<E: Display>(plan: &MenuPlan<'_>, narration: Result<String, E>) -> PlanArtifact {
    let narration = match narration {
        Ok(text) => NarrationStatus::Complete { text },
        Err(error) => NarrationStatus::Incomplete {
            error: error.to_string(),
        },
    };

    PlanArtifact {
        days: assemble(plan).days,
        narration,
        generated_at: None,
    }
}
