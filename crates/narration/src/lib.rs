pub mod client;
pub mod error;

pub use client::{GenerativeNarrator, NarrationConfig};
pub use error::NarrationError;

use async_trait::async_trait;
use pantryplan_planner::NarrationRequest;

/// Turns a decided, structured plan into human-readable prose.
///
/// The request carries everything the service may describe and nothing it
/// could use to re-rank; the response is opaque text that callers store
/// verbatim. Implementations own their retry policy; callers never retry.
#[async_trait]
pub trait NarrationService: Send + Sync {
    async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarrationError>;
}
