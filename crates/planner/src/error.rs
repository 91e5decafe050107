use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    #[error("malformed recipe '{title}': {reason}")]
    MalformedRecipe { title: String, reason: String },

    #[error("recipe corpus is empty, nothing to plan")]
    EmptyCorpus,

    #[error("invalid planning horizon: {days} days (must be at least 1)")]
    InvalidHorizon { days: usize },
}
