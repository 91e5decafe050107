pub mod config;
pub mod observability;
pub mod render;
pub mod session;

pub use config::Config;
pub use session::{PlanError, PlanningSession};

pub use pantryplan_categorize as categorize;
pub use pantryplan_corpus as corpus;
pub use pantryplan_narration as narration;
pub use pantryplan_planner as planner;
