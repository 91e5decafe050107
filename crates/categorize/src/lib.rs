pub mod cache;
pub mod error;
pub mod shelf;

pub use cache::FileCache;
pub use error::CategorizeError;
pub use shelf::PantryShelf;

use async_trait::async_trait;
use std::collections::BTreeMap;

/// Maps a set of raw ingredient names to a grouping of category name ->
/// ingredient names.
///
/// The grouping is presentation-only: scoring never sees it. Implementations
/// may call out to a generative service; [`PantryShelf`] is the offline
/// rule-based fallback and [`FileCache`] memoizes any implementation behind
/// a `get_or_compute` contract.
#[async_trait]
pub trait IngredientCategorizer: Send + Sync {
    async fn categorize(
        &self,
        ingredients: &[String],
    ) -> Result<BTreeMap<String, Vec<String>>, CategorizeError>;
}
