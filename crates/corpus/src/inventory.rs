use crate::error::CorpusError;
use pantryplan_planner::InventorySet;
use std::collections::BTreeMap;
use std::path::Path;

/// Load a categorized inventory snapshot (category name -> ingredient
/// names).
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<BTreeMap<String, Vec<String>>, CorpusError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&raw)?)
}

/// Persist a categorized inventory snapshot. Last write wins; there is no
/// merge.
pub fn save_snapshot(
    path: impl AsRef<Path>,
    snapshot: &BTreeMap<String, Vec<String>>,
) -> Result<(), CorpusError> {
    let body = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path.as_ref(), body)?;
    Ok(())
}

/// Turn a snapshot into the core inventory value. The category grouping is
/// cosmetic and dropped here.
pub fn flatten(snapshot: &BTreeMap<String, Vec<String>>) -> InventorySet {
    InventorySet::from_categorized(snapshot)
}
