//! Canonical export: content-score dedup plus diff-friendly serialization.
//!
//! Uniqueness of `symbol` is enforced here and only here; the live editable
//! list may carry duplicates freely. Dedup keeps, for every symbol, the
//! record with the strictly highest content score; on a tie the first
//! occurrence wins, and the surviving record keeps the list position of the
//! first occurrence, so the export is deterministic for any input order of
//! equals.

use std::collections::HashMap;

use tracing::debug;

use glyphdex_core::{CatalogResult, Dataset, SymbolRecord};

/// Collapses records sharing a `symbol`, keeping the richer one.
///
/// Pure: the live dataset is never mutated. Relative order of surviving
/// records follows the first occurrence of each symbol.
#[must_use]
pub fn dedup_by_content(dataset: &Dataset) -> Dataset {
    let mut kept: Vec<SymbolRecord> = Vec::with_capacity(dataset.symbols.len());
    let mut index_of: HashMap<&str, usize> = HashMap::new();

    for record in &dataset.symbols {
        match index_of.get(record.symbol.as_str()) {
            Some(&at) => {
                if record.content_score() > kept[at].content_score() {
                    kept[at] = record.clone();
                }
            }
            None => {
                index_of.insert(record.symbol.as_str(), kept.len());
                kept.push(record.clone());
            }
        }
    }

    let dropped = dataset.symbols.len() - kept.len();
    if dropped > 0 {
        debug!(
            target: "glyphdex.export",
            record_count = kept.len(),
            dropped_count = dropped,
            "duplicate symbols collapsed for export"
        );
    }

    dataset.with_symbols(kept)
}

/// The canonical export view of a dataset: deduplicated, fields in the fixed
/// serialization order.
#[must_use]
pub fn export(dataset: &Dataset) -> Dataset {
    dedup_by_content(dataset)
}

/// Serializes the canonical export view as pretty-printed JSON.
///
/// Field order is fixed by the struct definitions (`version`, `systemRanges`,
/// `symbols`; records as `symbol`, `name`, `pronunciation`, `category`,
/// `searchTerms`, `notes`) so exports diff cleanly.
pub fn export_json(dataset: &Dataset) -> CatalogResult<String> {
    Ok(serde_json::to_string_pretty(&export(dataset))?)
}
