//! Phonetic expansion of ideographic text.
//!
//! Any field containing a character in the ideographic range U+4E00-U+9FA5
//! can be expanded into three romanized variants through the injected
//! [`Transliterator`]: the full reading with a syllable separator, the full
//! reading with the separator stripped, and the first-letter-only reading.
//!
//! Two usage modes:
//!
//! - **Persistent augmentation** ([`augment_dataset`]): variants of every
//!   ideograph-bearing search term are unioned into the stored
//!   `search_terms`. Set semantics make this idempotent: re-running it never
//!   grows the list.
//! - **Transient expansion** ([`phonetic_variants`]): applied on the fly to
//!   record fields during a free-text search pass; nothing is persisted.
//!
//! A failed transliteration degrades to an empty expansion; it never aborts
//! the surrounding operation.

use tracing::debug;

use glyphdex_core::{Dataset, PhoneticMode, SymbolRecord, Transliterator};

/// Separator handed to the transliterator for the spaced full reading.
pub const SYLLABLE_SEPARATOR: &str = " ";

/// Whether `c` falls in the ideographic range U+4E00-U+9FA5.
#[must_use]
pub fn is_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FA5}')
}

/// Whether any character of `text` is ideographic.
#[must_use]
pub fn contains_ideograph(text: &str) -> bool {
    text.chars().any(is_ideograph)
}

/// The romanized variants of `text`, or an empty list when `text` carries no
/// ideographs or the transliterator fails.
///
/// Blank and duplicate readings are dropped, so callers can union the result
/// directly into a term set.
#[must_use]
pub fn phonetic_variants(text: &str, transliterator: &dyn Transliterator) -> Vec<String> {
    if !contains_ideograph(text) {
        return Vec::new();
    }

    let requests = [
        (PhoneticMode::Full, SYLLABLE_SEPARATOR),
        (PhoneticMode::Full, ""),
        (PhoneticMode::FirstLetter, ""),
    ];

    let mut variants: Vec<String> = Vec::with_capacity(requests.len());
    for (mode, separator) in requests {
        match transliterator.transliterate(text, mode, separator) {
            Ok(reading) => {
                if !reading.trim().is_empty() && !variants.contains(&reading) {
                    variants.push(reading);
                }
            }
            Err(error) => {
                debug!(
                    target: "glyphdex.phonetic",
                    %error,
                    "transliteration failed; phonetic expansion degraded"
                );
            }
        }
    }
    variants
}

/// Returns a copy of `record` with the variants of every ideograph-bearing
/// search term unioned into `search_terms`.
///
/// Idempotent: augmenting an already-augmented record is a no-op.
#[must_use]
pub fn augment_record(record: &SymbolRecord, transliterator: &dyn Transliterator) -> SymbolRecord {
    let mut search_terms = record.search_terms.clone();
    for term in &record.search_terms {
        for variant in phonetic_variants(term, transliterator) {
            if !search_terms.contains(&variant) {
                search_terms.push(variant);
            }
        }
    }

    let mut augmented = record.clone();
    augmented.search_terms = search_terms;
    augmented
}

/// Applies [`augment_record`] across the whole dataset, returning a fresh
/// copy. The live dataset is never mutated.
#[must_use]
pub fn augment_dataset(dataset: &Dataset, transliterator: &dyn Transliterator) -> Dataset {
    let symbols: Vec<SymbolRecord> = dataset
        .symbols
        .iter()
        .map(|record| augment_record(record, transliterator))
        .collect();

    let added: usize = symbols
        .iter()
        .zip(&dataset.symbols)
        .map(|(after, before)| after.search_terms.len() - before.search_terms.len())
        .sum();
    debug!(
        target: "glyphdex.phonetic",
        record_count = symbols.len(),
        variant_count = added,
        "search terms augmented with phonetic variants"
    );

    dataset.with_symbols(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphdex_core::{CatalogError, CatalogResult, NullTransliterator};

    /// Table-driven pinyin stand-in: a few fixed readings, pass-through for
    /// anything else.
    struct PinyinStub;

    fn syllable(c: char) -> Option<&'static str> {
        match c {
            '中' => Some("zhong"),
            '文' => Some("wen"),
            '学' => Some("xue"),
            _ => None,
        }
    }

    impl Transliterator for PinyinStub {
        fn transliterate(
            &self,
            text: &str,
            mode: PhoneticMode,
            separator: &str,
        ) -> CatalogResult<String> {
            let readings: Vec<String> = text
                .chars()
                .map(|c| match (syllable(c), mode) {
                    (Some(s), PhoneticMode::Full) => s.to_owned(),
                    (Some(s), PhoneticMode::FirstLetter) => s[..1].to_owned(),
                    (None, _) => c.to_string(),
                })
                .collect();
            Ok(readings.join(separator))
        }

        fn id(&self) -> &str {
            "pinyin-stub"
        }
    }

    struct FailingTransliterator;

    impl Transliterator for FailingTransliterator {
        fn transliterate(
            &self,
            _text: &str,
            _mode: PhoneticMode,
            _separator: &str,
        ) -> CatalogResult<String> {
            Err(CatalogError::Transliteration {
                source: Box::new(std::io::Error::other("service down")),
            })
        }

        fn id(&self) -> &str {
            "failing"
        }
    }

    // ── Ideograph detection ────────────────────────────────────────────

    #[test]
    fn ideograph_range_bounds() {
        assert!(is_ideograph('\u{4E00}'));
        assert!(is_ideograph('中'));
        assert!(is_ideograph('\u{9FA5}'));
        assert!(!is_ideograph('\u{4DFF}'));
        assert!(!is_ideograph('\u{9FA6}'));
        assert!(!is_ideograph('a'));
        assert!(!is_ideograph('€'));
    }

    #[test]
    fn contains_ideograph_mixed_text() {
        assert!(contains_ideograph("abc中def"));
        assert!(!contains_ideograph("abcdef"));
        assert!(!contains_ideograph(""));
    }

    // ── Variants ───────────────────────────────────────────────────────

    #[test]
    fn variants_for_multi_syllable_text() {
        let variants = phonetic_variants("中文", &PinyinStub);
        assert_eq!(variants, vec!["zhong wen", "zhongwen", "zw"]);
    }

    #[test]
    fn single_syllable_collapses_duplicate_readings() {
        // Spaced and stripped full readings coincide for one syllable.
        let variants = phonetic_variants("中", &PinyinStub);
        assert_eq!(variants, vec!["zhong", "z"]);
    }

    #[test]
    fn latin_text_has_no_variants() {
        assert!(phonetic_variants("euro", &PinyinStub).is_empty());
    }

    #[test]
    fn failed_transliteration_degrades_to_empty() {
        assert!(phonetic_variants("中文", &FailingTransliterator).is_empty());
    }

    #[test]
    fn null_transliterator_produces_nothing() {
        assert!(phonetic_variants("中文", &NullTransliterator).is_empty());
    }

    // ── Persistent augmentation ────────────────────────────────────────

    #[test]
    fn augmentation_unions_variants_into_terms() {
        let record = SymbolRecord::new("中", "middle").with_search_term("中");
        let augmented = augment_record(&record, &PinyinStub);
        assert_eq!(augmented.search_terms, vec!["中", "zhong", "z"]);
    }

    #[test]
    fn augmentation_skips_latin_terms() {
        let record = SymbolRecord::new("€", "Euro").with_search_term("euro");
        let augmented = augment_record(&record, &PinyinStub);
        assert_eq!(augmented.search_terms, vec!["euro"]);
    }

    #[test]
    fn augmentation_is_idempotent() {
        let record = SymbolRecord::new("学", "study")
            .with_search_term("学")
            .with_search_term("中文");
        let once = augment_record(&record, &PinyinStub);
        let twice = augment_record(&once, &PinyinStub);
        assert_eq!(once, twice);
    }

    #[test]
    fn augmentation_with_failing_service_is_a_noop() {
        let record = SymbolRecord::new("中", "middle").with_search_term("中");
        let augmented = augment_record(&record, &FailingTransliterator);
        assert_eq!(augmented, record);
    }

    #[test]
    fn dataset_augmentation_touches_every_record() {
        let dataset = Dataset::new().with_symbols(vec![
            SymbolRecord::new("中", "middle").with_search_term("中"),
            SymbolRecord::new("文", "script").with_search_term("文"),
        ]);
        let augmented = augment_dataset(&dataset, &PinyinStub);
        assert!(augmented.symbols[0].search_terms.contains(&"zhong".to_owned()));
        assert!(augmented.symbols[1].search_terms.contains(&"wen".to_owned()));
        // Pure: the input is untouched.
        assert_eq!(dataset.symbols[0].search_terms, vec!["中"]);
    }
}
