pub mod assembler;
pub mod error;
pub mod normalize;
pub mod rotation;
pub mod scorer;
pub mod selector;
pub mod types;

pub use assembler::{DayBrief, NarrationRequest, NarrationStatus, PlanArtifact, assemble, finalize};
pub use error::PlanningError;
pub use normalize::normalize_name;
pub use rotation::RotationQueue;
pub use scorer::score;
pub use selector::select;
pub use types::{InventorySet, MenuPlan, RecipeRecord, ScoredRecipe};
