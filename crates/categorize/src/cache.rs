use crate::{CategorizeError, IngredientCategorizer};
use async_trait::async_trait;
use pantryplan_planner::normalize_name;
use sha3::{Digest, Sha3_224};
use std::collections::BTreeMap;
use std::path::PathBuf;

type Categorized = BTreeMap<String, Vec<String>>;

/// File-backed memoization of an [`IngredientCategorizer`].
///
/// The `get_or_compute` contract: a given ingredient set reaches the inner
/// categorizer at most once per cache file; later calls with the same set
/// (in any order, any spelling that normalizes equal) are served from disk.
/// A corrupt cache file is discarded and rebuilt, never an error.
pub struct FileCache<C> {
    inner: C,
    path: PathBuf,
}

impl<C> FileCache<C>
where
    C: IngredientCategorizer,
{
    pub fn new(inner: C, path: impl Into<PathBuf>) -> Self {
        FileCache {
            inner,
            path: path.into(),
        }
    }

    /// Return the cached grouping for this ingredient set, calling the inner
    /// categorizer only on a miss.
    pub async fn get_or_compute(&self, ingredients: &[String]) -> Result<Categorized, CategorizeError> {
        let key = cache_key(ingredients);

        let mut entries = self.read_entries();
        if let Some(hit) = entries.get(&key) {
            tracing::debug!(key = %key, "categorization cache hit");
            return Ok(hit.clone());
        }

        let computed = self.inner.categorize(ingredients).await?;
        entries.insert(key, computed.clone());
        self.write_entries(&entries)?;

        Ok(computed)
    }

    fn read_entries(&self) -> BTreeMap<String, Categorized> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "categorization cache is corrupt, rebuilding"
                );
                BTreeMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, Categorized>) -> Result<(), CategorizeError> {
        let body = serde_json::to_string_pretty(entries)
            .map_err(|err| CategorizeError::Upstream(err.to_string()))?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }
}

#[async_trait]
impl<C> IngredientCategorizer for FileCache<C>
where
    C: IngredientCategorizer,
{
    async fn categorize(&self, ingredients: &[String]) -> Result<Categorized, CategorizeError> {
        self.get_or_compute(ingredients).await
    }
}

/// Digest of the sorted, normalized ingredient set: ordering and spelling
/// variations of the same set share one cache entry.
fn cache_key(ingredients: &[String]) -> String {
    let mut names: Vec<String> = ingredients.iter().map(|raw| normalize_name(raw)).collect();
    names.sort();
    names.dedup();

    let mut hasher = Sha3_224::default();
    for name in &names {
        hasher.update(name.as_bytes());
        hasher.update(b"\n");
    }
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
