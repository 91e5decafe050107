pub mod error;
pub mod inventory;
pub mod store;

pub use error::CorpusError;
pub use inventory::{flatten, load_snapshot, save_snapshot};
pub use store::{append_recipe, ingredient_catalog, load_recipes, parse_meat_flag};
