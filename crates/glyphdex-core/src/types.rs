//! Canonical record and dataset types shared across all glyphdex crates.
//!
//! Field order on the serialized structs is significant: exports are meant to
//! be diffed, so `SymbolRecord` always serializes as
//! `symbol, name, pronunciation, category, searchTerms, notes` and `Dataset`
//! as `version, systemRanges, symbols`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Version written when an ingested document carries none.
pub const DEFAULT_VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// SymbolRecord
// ---------------------------------------------------------------------------

/// One catalog entry: a single symbolic character plus its metadata.
///
/// `symbol` is the identity key and holds exactly one Unicode grapheme.
/// `category` and `search_terms` never contain empty or whitespace-only
/// entries once a record has passed through [`SymbolRecord::sanitized`]
/// (which every ingestion and editor path does); `search_terms` is
/// semantically a set, so duplicates are suppressed on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    /// The symbol itself (identity key, never empty).
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Reading/pronunciation, may be empty.
    #[serde(default)]
    pub pronunciation: String,
    /// Ordered category labels.
    #[serde(default)]
    pub category: Vec<String>,
    /// Searchable keywords (set semantics, insertion order preserved).
    #[serde(default)]
    pub search_terms: Vec<String>,
    /// Free-text notes, may be empty.
    #[serde(default)]
    pub notes: String,
}

impl SymbolRecord {
    /// Creates a record with the required fields; everything else empty.
    #[must_use]
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            pronunciation: String::new(),
            category: Vec::new(),
            search_terms: Vec::new(),
            notes: String::new(),
        }
    }

    /// Sets the pronunciation.
    #[must_use]
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = pronunciation.into();
        self
    }

    /// Appends a category label.
    #[must_use]
    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.category.push(label.into());
        self
    }

    /// Appends a search term.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_terms.push(term.into());
        self
    }

    /// Sets the notes text.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Returns a copy with blank category/search-term entries dropped and
    /// duplicate search terms suppressed (first occurrence wins).
    ///
    /// Idempotent: sanitizing an already-sanitized record is a no-op.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let category = self
            .category
            .iter()
            .filter(|label| !label.trim().is_empty())
            .cloned()
            .collect();

        let mut search_terms: Vec<String> = Vec::with_capacity(self.search_terms.len());
        for term in &self.search_terms {
            if term.trim().is_empty() || search_terms.iter().any(|t| t == term) {
                continue;
            }
            search_terms.push(term.clone());
        }

        Self {
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            pronunciation: self.pronunciation.clone(),
            category,
            search_terms,
            notes: self.notes.clone(),
        }
    }

    /// The first Unicode code point of `symbol`, or `None` for an empty
    /// symbol (which never survives normalization).
    #[must_use]
    pub fn first_code_point(&self) -> Option<u32> {
        self.symbol.chars().next().map(|c| c as u32)
    }

    /// Content-richness score used to pick the better record during dedup.
    ///
    /// `2·len(name) + len(pronunciation) + Σlen(category) + count(category)
    /// + Σlen(search_terms) + count(search_terms) + len(notes)`, with all
    /// lengths counted in UTF-16 code units.
    #[must_use]
    pub fn content_score(&self) -> u64 {
        let category_len: u64 = self.category.iter().map(|c| utf16_len(c)).sum();
        let terms_len: u64 = self.search_terms.iter().map(|t| utf16_len(t)).sum();

        2 * utf16_len(&self.name)
            + utf16_len(&self.pronunciation)
            + category_len
            + self.category.len() as u64
            + terms_len
            + self.search_terms.len() as u64
            + utf16_len(&self.notes)
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// The whole catalog: a version tag, per-platform unsupported code-point
/// ranges, and the ordered record list.
///
/// Every top-level operation is a pure `Dataset -> Dataset` function; the
/// owning store installs the returned value atomically and never mutates a
/// dataset in place. Uniqueness of `symbol` is enforced only at export time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Semantic-version string; canonical storage carries no `-beta` suffix.
    pub version: String,
    /// Platform tag -> ordered list of `XXXX-YYYY` hex range strings.
    #[serde(default)]
    pub system_ranges: BTreeMap<String, Vec<String>>,
    /// The record list, in editing order.
    #[serde(default)]
    pub symbols: Vec<SymbolRecord>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_owned(),
            system_ranges: BTreeMap::new(),
            symbols: Vec::new(),
        }
    }
}

impl Dataset {
    /// Creates an empty dataset at [`DEFAULT_VERSION`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy carrying `symbols` in place of the current list.
    ///
    /// The standard way for an operation to hand back a transformed dataset
    /// without touching version or system ranges.
    #[must_use]
    pub fn with_symbols(&self, symbols: Vec<SymbolRecord>) -> Self {
        Self {
            version: self.version.clone(),
            system_ranges: self.system_ranges.clone(),
            symbols,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the record list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Code-point and length helpers
// ---------------------------------------------------------------------------

/// Length of `text` in UTF-16 code units.
///
/// Scoring and the notes-length ordering count in UTF-16 units, so characters
/// outside the BMP (emoji, rare ideographs) count as two.
#[must_use]
pub fn utf16_len(text: &str) -> u64 {
    text.encode_utf16().count() as u64
}

/// Formats a code point as `U+` plus uppercase hex, left-padded to at least
/// four digits (`U+004E`, `U+1F600`).
#[must_use]
pub fn format_code_point(code_point: u32) -> String {
    format!("U+{code_point:04X}")
}

/// Parses a hex digit group with a digit-count constraint.
///
/// Returns `None` if the group is empty, out of the `[min_digits,
/// max_digits]` length range, contains a non-hex character, or overflows
/// `u32`.
#[must_use]
pub fn parse_hex_group(text: &str, min_digits: usize, max_digits: usize) -> Option<u32> {
    let digits = text.len();
    if digits < min_digits || digits > max_digits {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(text, 16).ok()
}
