//! Per-platform unsupported code-point range management.
//!
//! Ranges use the same `XXXX-YYYY` syntax the query interpreter accepts
//! (two groups of 4-5 hex digits); they are validated on entry and stored
//! uppercased.

use tracing::debug;

use glyphdex_core::{parse_hex_group, CatalogError, CatalogResult, Dataset};

/// Whether `text` is a well-formed `XXXX-YYYY` hex range.
#[must_use]
pub fn is_valid_range(text: &str) -> bool {
    let Some((lo, hi)) = text.split_once('-') else {
        return false;
    };
    parse_hex_group(lo, 4, 5).is_some() && parse_hex_group(hi, 4, 5).is_some()
}

/// Returns a copy of `dataset` with `range` appended to `platform`'s list.
///
/// The range is stored uppercased; re-adding an existing range is a no-op.
/// Rejects malformed input with [`CatalogError::InvalidRange`].
pub fn add_system_range(
    dataset: &Dataset,
    platform: &str,
    range: &str,
) -> CatalogResult<Dataset> {
    if !is_valid_range(range) {
        return Err(CatalogError::InvalidRange {
            value: range.to_owned(),
        });
    }
    let stored = range.to_ascii_uppercase();

    let mut updated = dataset.clone();
    let entries = updated.system_ranges.entry(platform.to_owned()).or_default();
    if !entries.contains(&stored) {
        entries.push(stored);
        debug!(target: "glyphdex.ranges", platform, "system range added");
    }
    Ok(updated)
}

/// Returns a copy of `dataset` with `range` removed from `platform`'s list.
///
/// Unknown platforms and absent ranges are no-ops; a platform emptied by the
/// removal keeps its (now empty) list.
#[must_use]
pub fn remove_system_range(dataset: &Dataset, platform: &str, range: &str) -> Dataset {
    let mut updated = dataset.clone();
    if let Some(entries) = updated.system_ranges.get_mut(platform) {
        entries.retain(|entry| entry != range);
    }
    updated
}
