//! Record matching: filters the record list against an interpreted query.
//!
//! Range and single-code-point queries consult only the first code point of
//! `symbol`. Free-text queries match against the record's content set
//! (symbol, name, every category label, every search term, pronunciation, and
//! the `U+XXXX`-formatted code point), with every ideograph-bearing entry
//! transiently expanded through the [`Transliterator`].
//!
//! The filter is stable: matching records keep their original relative
//! order, and nothing is re-sorted.

use tracing::debug;

use glyphdex_core::{format_code_point, Dataset, SymbolRecord, Transliterator};

use crate::phonetic::phonetic_variants;
use crate::query::Query;

/// Filters `dataset` against `query`, returning a fresh dataset holding only
/// the matching records in their original order.
#[must_use]
pub fn search(dataset: &Dataset, query: &Query, transliterator: &dyn Transliterator) -> Dataset {
    let matched: Vec<SymbolRecord> = dataset
        .symbols
        .iter()
        .filter(|record| record_matches(record, query, transliterator))
        .cloned()
        .collect();

    debug!(
        target: "glyphdex.search",
        query_class = query.class(),
        record_count = dataset.len(),
        result_count = matched.len(),
        "search pass complete"
    );

    dataset.with_symbols(matched)
}

/// Whether a single record matches the query.
#[must_use]
pub fn record_matches(
    record: &SymbolRecord,
    query: &Query,
    transliterator: &dyn Transliterator,
) -> bool {
    match query {
        Query::Range { .. } | Query::CodePoint(_) => record
            .first_code_point()
            .is_some_and(|code_point| query.matches_code_point(code_point)),
        Query::Text { lowered, compact } => text_matches(record, lowered, compact, transliterator),
    }
}

fn text_matches(
    record: &SymbolRecord,
    lowered: &str,
    compact: &str,
    transliterator: &dyn Transliterator,
) -> bool {
    for entry in content_entries(record) {
        if entry_matches(&entry, lowered, compact) {
            return true;
        }
        for variant in phonetic_variants(&entry, transliterator) {
            if entry_matches(&variant, lowered, compact) {
                return true;
            }
        }
    }
    false
}

/// The record's free-text-searchable content set.
fn content_entries(record: &SymbolRecord) -> Vec<String> {
    let mut entries =
        Vec::with_capacity(4 + record.category.len() + record.search_terms.len());
    entries.push(record.symbol.clone());
    entries.push(record.name.clone());
    entries.extend(record.category.iter().cloned());
    entries.extend(record.search_terms.iter().cloned());
    entries.push(record.pronunciation.clone());
    if let Some(code_point) = record.first_code_point() {
        entries.push(format_code_point(code_point));
    }
    entries
}

/// Substring match on the lowered form, or on both sides with internal
/// whitespace removed.
fn entry_matches(entry: &str, lowered: &str, compact: &str) -> bool {
    let entry_lowered = entry.to_lowercase();
    if entry_lowered.contains(lowered) {
        return true;
    }
    let entry_compact: String = entry_lowered
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    entry_compact.contains(compact)
}
