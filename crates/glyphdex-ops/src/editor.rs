//! Editor-level record operations: insert/save, delete, bulk search-term
//! reset, and note generation.
//!
//! All of these are pure `Dataset -> Dataset` (or record -> record)
//! transformations; the owning store installs the returned value. Only
//! [`generate_notes`] touches a capability, and its errors go back to the
//! editor caller instead of degrading silently.

use tracing::debug;

use glyphdex_core::{CatalogResult, Dataset, NoteGenerator, SymbolRecord};

/// Saves a record: replaces the first record with the same `symbol`, or
/// appends when the symbol is new.
///
/// The record is sanitized on write (blank category/search-term entries
/// dropped, duplicate terms suppressed). A record with an empty symbol is
/// ignored, since it could never be addressed again.
#[must_use]
pub fn upsert_record(dataset: &Dataset, record: SymbolRecord) -> Dataset {
    let record = record.sanitized();
    if record.symbol.is_empty() {
        debug!(target: "glyphdex.editor", "upsert ignored: record has an empty symbol");
        return dataset.clone();
    }

    let mut symbols = dataset.symbols.clone();
    match symbols.iter_mut().find(|r| r.symbol == record.symbol) {
        Some(existing) => *existing = record,
        None => symbols.push(record),
    }
    dataset.with_symbols(symbols)
}

/// Removes every record whose `symbol` matches.
#[must_use]
pub fn delete_record(dataset: &Dataset, symbol: &str) -> Dataset {
    let symbols = dataset
        .symbols
        .iter()
        .filter(|record| record.symbol != symbol)
        .cloned()
        .collect();
    dataset.with_symbols(symbols)
}

/// Bulk transform clearing every record's search terms, e.g. before
/// re-seeding them from scratch.
#[must_use]
pub fn reset_search_terms(dataset: &Dataset) -> Dataset {
    let symbols = dataset
        .symbols
        .iter()
        .map(|record| {
            let mut cleared = record.clone();
            cleared.search_terms.clear();
            cleared
        })
        .collect();
    dataset.with_symbols(symbols)
}

/// Asks the injected [`NoteGenerator`] for note text and returns a copy of
/// the record carrying it.
///
/// Editor-only: generation failures propagate to the caller.
pub fn generate_notes(
    record: &SymbolRecord,
    generator: &dyn NoteGenerator,
) -> CatalogResult<SymbolRecord> {
    let notes = generator.generate(&record.symbol, &record.name)?;
    let mut updated = record.clone();
    updated.notes = notes;
    Ok(updated)
}
