//! Schema normalization: arbitrary ingested JSON into the canonical [`Dataset`].
//!
//! Two shapes are recognized, tried in a fixed priority order:
//!
//! 1. **Native**: a top-level `symbols` array. Elements may carry the legacy
//!    fields `id` (discarded) and `description` (fallback for `name`).
//! 2. **Foreign**: an emoji export, i.e. an `emojis` or `data` array, or a bare
//!    array. Elements use the field fallback chains `emoji|unicode|char`,
//!    `name|annotation|description`, `category|group`, `keywords|tags`,
//!    `text|shortcode`.
//!
//! Anything else is a [`CatalogError::UnrecognizedShape`]; no partial dataset
//! is ever produced. Past shape detection the decode is total: non-object
//! elements, elements without a usable symbol, and non-string list entries
//! are skipped rather than failing the import.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use glyphdex_core::{CatalogError, CatalogResult, Dataset, SymbolRecord, DEFAULT_VERSION};

/// Which known schema an ingested document matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentShape {
    Native,
    Foreign,
}

/// Normalizes raw JSON text into a canonical [`Dataset`].
///
/// Malformed JSON is a single atomic failure ([`CatalogError::Json`]);
/// nothing is imported.
pub fn normalize_str(text: &str) -> CatalogResult<Dataset> {
    let value: Value = serde_json::from_str(text)?;
    normalize(&value)
}

/// Normalizes a parsed JSON value into a canonical [`Dataset`].
///
/// Fails only when the value matches neither known shape; the decode itself
/// never fails.
pub fn normalize(value: &Value) -> CatalogResult<Dataset> {
    match detect_shape(value) {
        Some(DocumentShape::Native) => Ok(decode_native(value)),
        Some(DocumentShape::Foreign) => Ok(decode_foreign(value)),
        None => Err(CatalogError::UnrecognizedShape),
    }
}

fn detect_shape(value: &Value) -> Option<DocumentShape> {
    if value.get("symbols").is_some_and(Value::is_array) {
        return Some(DocumentShape::Native);
    }
    if value.get("emojis").is_some() || value.get("data").is_some() || value.is_array() {
        return Some(DocumentShape::Foreign);
    }
    None
}

// ─── Native schema ──────────────────────────────────────────────────────────

fn decode_native(value: &Value) -> Dataset {
    let version = value
        .get("version")
        .and_then(Value::as_str)
        .map_or_else(|| DEFAULT_VERSION.to_owned(), strip_beta_suffix);
    let system_ranges = decode_system_ranges(value.get("systemRanges"));

    let elements = value
        .get("symbols")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);
    let symbols: Vec<SymbolRecord> = elements.iter().filter_map(decode_native_record).collect();

    debug!(
        target: "glyphdex.ingest",
        shape = "native",
        record_count = symbols.len(),
        skipped_count = elements.len() - symbols.len(),
        "document normalized"
    );

    Dataset {
        version,
        system_ranges,
        symbols,
    }
}

fn decode_native_record(element: &Value) -> Option<SymbolRecord> {
    let obj = element.as_object()?;
    // `id` is a legacy field and is deliberately not read.
    let symbol = text_field(obj, &["symbol"]).filter(|s| !s.is_empty())?;

    let record = SymbolRecord {
        symbol,
        name: text_field(obj, &["name", "description"]).unwrap_or_default(),
        pronunciation: text_field(obj, &["pronunciation"]).unwrap_or_default(),
        category: list_field(obj, &["category"]),
        search_terms: list_field(obj, &["searchTerms"]),
        notes: text_field(obj, &["notes"]).unwrap_or_default(),
    };
    Some(record.sanitized())
}

// ─── Foreign (emoji export) schema ──────────────────────────────────────────

fn decode_foreign(value: &Value) -> Dataset {
    let elements = value
        .get("emojis")
        .and_then(Value::as_array)
        .or_else(|| value.get("data").and_then(Value::as_array))
        .or_else(|| value.as_array())
        .map_or(&[][..], Vec::as_slice);
    let symbols: Vec<SymbolRecord> = elements.iter().filter_map(decode_foreign_record).collect();

    debug!(
        target: "glyphdex.ingest",
        shape = "foreign",
        record_count = symbols.len(),
        skipped_count = elements.len() - symbols.len(),
        "document normalized"
    );

    Dataset {
        version: DEFAULT_VERSION.to_owned(),
        system_ranges: BTreeMap::new(),
        symbols,
    }
}

fn decode_foreign_record(element: &Value) -> Option<SymbolRecord> {
    let obj = element.as_object()?;
    let symbol = text_field(obj, &["emoji", "unicode", "char"]).filter(|s| !s.is_empty())?;

    let record = SymbolRecord {
        symbol,
        name: text_field(obj, &["name", "annotation", "description"]).unwrap_or_default(),
        pronunciation: String::new(),
        category: list_field(obj, &["category", "group"]),
        search_terms: list_field(obj, &["keywords", "tags"]),
        notes: text_field(obj, &["text", "shortcode"]).unwrap_or_default(),
    };
    Some(record.sanitized())
}

// ─── Field helpers ──────────────────────────────────────────────────────────

/// First key whose value is a string. `null` and non-string values fall
/// through to the next key in the chain.
fn text_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}

/// First key holding a list of strings, or a lone string treated as a
/// singleton list. Non-string list entries are ignored.
fn list_field(obj: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    for key in keys {
        match obj.get(*key) {
            Some(Value::Array(items)) => {
                return items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect();
            }
            Some(Value::String(s)) => return vec![s.clone()],
            _ => {}
        }
    }
    Vec::new()
}

fn decode_system_ranges(value: Option<&Value>) -> BTreeMap<String, Vec<String>> {
    let Some(map) = value.and_then(Value::as_object) else {
        return BTreeMap::new();
    };
    map.iter()
        .map(|(platform, ranges)| {
            let list = ranges
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default();
            (platform.clone(), list)
        })
        .collect()
}

/// Drops everything from the first `-beta` marker to the end of the version
/// string; canonical storage never carries a beta suffix.
fn strip_beta_suffix(version: &str) -> String {
    match version.find("-beta") {
        Some(at) => version[..at].to_owned(),
        None => version.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Native schema ──────────────────────────────────────────────────

    #[test]
    fn native_decodes_full_record() {
        let doc = json!({
            "version": "2.1.0",
            "symbols": [{
                "symbol": "中",
                "name": "middle",
                "pronunciation": "zhōng",
                "category": ["cjk", "common"],
                "searchTerms": ["中", "zhong"],
                "notes": "basic ideograph"
            }]
        });
        let dataset = normalize(&doc).unwrap();
        assert_eq!(dataset.version, "2.1.0");
        let record = &dataset.symbols[0];
        assert_eq!(record.symbol, "中");
        assert_eq!(record.name, "middle");
        assert_eq!(record.pronunciation, "zhōng");
        assert_eq!(record.category, vec!["cjk", "common"]);
        assert_eq!(record.search_terms, vec!["中", "zhong"]);
        assert_eq!(record.notes, "basic ideograph");
    }

    #[test]
    fn native_discards_id_and_falls_back_to_description() {
        let doc = json!({
            "symbols": [{
                "id": "1736208000000",
                "symbol": "€",
                "description": "Euro sign"
            }]
        });
        let dataset = normalize(&doc).unwrap();
        let record = &dataset.symbols[0];
        assert_eq!(record.name, "Euro sign");
        assert!(record.pronunciation.is_empty());
        assert!(record.category.is_empty());
        assert!(record.search_terms.is_empty());
        assert!(record.notes.is_empty());
    }

    #[test]
    fn native_name_key_beats_description() {
        let doc = json!({
            "symbols": [{ "symbol": "€", "name": "Euro", "description": "legacy" }]
        });
        let dataset = normalize(&doc).unwrap();
        assert_eq!(dataset.symbols[0].name, "Euro");
    }

    #[test]
    fn native_version_defaults_and_beta_is_stripped() {
        let doc = json!({ "symbols": [] });
        assert_eq!(normalize(&doc).unwrap().version, DEFAULT_VERSION);

        let doc = json!({ "version": "3.0.1-beta", "symbols": [] });
        assert_eq!(normalize(&doc).unwrap().version, "3.0.1");

        let doc = json!({ "version": "3.0.1-beta.2", "symbols": [] });
        assert_eq!(normalize(&doc).unwrap().version, "3.0.1");
    }

    #[test]
    fn native_carries_system_ranges() {
        let doc = json!({
            "symbols": [],
            "systemRanges": {
                "ios": ["0000-007F", "FE00-FE0F"],
                "android": []
            }
        });
        let dataset = normalize(&doc).unwrap();
        assert_eq!(
            dataset.system_ranges["ios"],
            vec!["0000-007F", "FE00-FE0F"]
        );
        assert!(dataset.system_ranges["android"].is_empty());
    }

    #[test]
    fn native_skips_records_without_symbol() {
        let doc = json!({
            "symbols": [
                { "name": "no symbol here" },
                { "symbol": "", "name": "empty symbol" },
                { "symbol": "A", "name": "letter a" },
                "not an object",
                42
            ]
        });
        let dataset = normalize(&doc).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.symbols[0].symbol, "A");
    }

    #[test]
    fn native_filters_blank_list_entries() {
        let doc = json!({
            "symbols": [{
                "symbol": "A",
                "name": "letter",
                "category": ["", "  ", "latin"],
                "searchTerms": ["a", "a", "  ", "alpha"]
            }]
        });
        let record = &normalize(&doc).unwrap().symbols[0];
        assert_eq!(record.category, vec!["latin"]);
        assert_eq!(record.search_terms, vec!["a", "alpha"]);
    }

    #[test]
    fn null_fields_fall_through_the_chain() {
        let doc = json!({
            "symbols": [{ "symbol": "A", "name": null, "description": "fallback" }]
        });
        assert_eq!(normalize(&doc).unwrap().symbols[0].name, "fallback");
    }

    // ── Foreign schema ─────────────────────────────────────────────────

    #[test]
    fn foreign_decodes_emojis_key() {
        let doc = json!({
            "emojis": [{
                "emoji": "😀",
                "annotation": "grinning face",
                "group": "smileys",
                "keywords": ["happy", "smile"],
                "shortcode": ":grinning:"
            }]
        });
        let dataset = normalize(&doc).unwrap();
        assert_eq!(dataset.version, DEFAULT_VERSION);
        assert!(dataset.system_ranges.is_empty());
        let record = &dataset.symbols[0];
        assert_eq!(record.symbol, "😀");
        assert_eq!(record.name, "grinning face");
        assert!(record.pronunciation.is_empty());
        assert_eq!(record.category, vec!["smileys"]);
        assert_eq!(record.search_terms, vec!["happy", "smile"]);
        assert_eq!(record.notes, ":grinning:");
    }

    #[test]
    fn foreign_decodes_data_key_and_tag_fallbacks() {
        let doc = json!({
            "data": [{
                "unicode": "☃",
                "description": "snowman",
                "category": "weather",
                "tags": ["cold", "winter"],
                "text": "a snowman with snow"
            }]
        });
        let record = &normalize(&doc).unwrap().symbols[0];
        assert_eq!(record.symbol, "☃");
        assert_eq!(record.name, "snowman");
        assert_eq!(record.category, vec!["weather"]);
        assert_eq!(record.search_terms, vec!["cold", "winter"]);
        assert_eq!(record.notes, "a snowman with snow");
    }

    #[test]
    fn foreign_decodes_bare_array() {
        let doc = json!([
            { "char": "♥", "name": "heart" },
            { "emoji": "★" }
        ]);
        let dataset = normalize(&doc).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.symbols[0].symbol, "♥");
        assert_eq!(dataset.symbols[1].symbol, "★");
        assert!(dataset.symbols[1].name.is_empty());
    }

    #[test]
    fn foreign_symbol_fallback_order_is_emoji_unicode_char() {
        let doc = json!([
            { "emoji": "😀", "unicode": "ignored", "char": "ignored" },
            { "unicode": "☃", "char": "ignored" }
        ]);
        let dataset = normalize(&doc).unwrap();
        assert_eq!(dataset.symbols[0].symbol, "😀");
        assert_eq!(dataset.symbols[1].symbol, "☃");
    }

    #[test]
    fn foreign_without_category_gets_empty_list() {
        let doc = json!([{ "emoji": "★", "name": "star" }]);
        assert!(normalize(&doc).unwrap().symbols[0].category.is_empty());
    }

    // ── Shape detection and failure ────────────────────────────────────

    #[test]
    fn native_wins_over_foreign_keys() {
        // `symbols` takes priority even when foreign keys are present.
        let doc = json!({
            "symbols": [{ "symbol": "A", "name": "letter" }],
            "data": [{ "emoji": "★" }]
        });
        let dataset = normalize(&doc).unwrap();
        assert_eq!(dataset.symbols[0].symbol, "A");
    }

    #[test]
    fn symbols_key_must_be_an_array() {
        // A non-array `symbols` is not the native shape; with no foreign
        // marker either, the document is unrecognized.
        let doc = json!({ "symbols": "not a list" });
        assert!(matches!(
            normalize(&doc),
            Err(CatalogError::UnrecognizedShape)
        ));
    }

    #[test]
    fn unrecognized_shapes_fail_atomically() {
        for doc in [json!({}), json!({ "foo": 1 }), json!(42), json!("text")] {
            assert!(matches!(
                normalize(&doc),
                Err(CatalogError::UnrecognizedShape)
            ));
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            normalize_str("{ this is not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn normalizing_canonical_output_is_identity() {
        let doc = json!({
            "version": "1.4.0",
            "systemRanges": { "mac": ["E000-F8FF"] },
            "symbols": [{
                "symbol": "中",
                "name": "middle",
                "pronunciation": "zhōng",
                "category": ["cjk"],
                "searchTerms": ["中", "zhong"],
                "notes": ""
            }]
        });
        let first = normalize(&doc).unwrap();
        let reencoded = serde_json::to_value(&first).unwrap();
        let second = normalize(&reencoded).unwrap();
        assert_eq!(first, second);
    }
}
