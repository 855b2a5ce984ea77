//! Capability traits for the glyphdex pipeline.
//!
//! - [`Transliterator`]: romanized-reading service for ideographic text.
//! - [`NoteGenerator`]: free-text note authoring service (editor-only).
//!
//! Both are object-safe (`dyn`-compatible) and `Send + Sync`. The pipeline
//! treats them as pure functions: same input, same output within a call.

use crate::error::CatalogResult;

// ─── Transliterator ─────────────────────────────────────────────────────────

/// Which reading the transliteration service should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticMode {
    /// The full romanized reading, syllables joined by the separator.
    Full,
    /// Only the first letter of each syllable.
    FirstLetter,
}

/// Romanized-reading service for ideographic text.
///
/// # Contract
///
/// - Calls are synchronous and side-effect-free; an implementation backed by
///   an asynchronous service must block until the reading is complete.
/// - `transliterate` receives text that is already known to contain
///   ideographs; implementations may pass non-ideographic characters through
///   unchanged.
///
/// # Graceful failure
///
/// A transliteration error never aborts a search or an augmentation pass.
/// Callers treat `Err(_)` as an empty expansion and continue matching on the
/// non-phonetic fields.
pub trait Transliterator: Send + Sync {
    /// Produces the reading of `text` in the requested mode, joining
    /// syllables with `separator` (which may be empty).
    fn transliterate(
        &self,
        text: &str,
        mode: PhoneticMode,
        separator: &str,
    ) -> CatalogResult<String>;

    /// A short, stable identifier for diagnostics and tracing.
    fn id(&self) -> &str;
}

/// Transliterator that never produces a reading.
///
/// Phonetic expansion degrades to a no-op: searches still match on symbol,
/// name, categories, raw search terms, and code points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransliterator;

impl Transliterator for NullTransliterator {
    fn transliterate(
        &self,
        _text: &str,
        _mode: PhoneticMode,
        _separator: &str,
    ) -> CatalogResult<String> {
        Ok(String::new())
    }

    fn id(&self) -> &str {
        "null"
    }
}

// ─── NoteGenerator ──────────────────────────────────────────────────────────

/// Free-text note authoring service.
///
/// Entirely outside the pure pipeline: only editor-level code calls it, and
/// its errors propagate to the editor caller rather than degrading silently.
pub trait NoteGenerator: Send + Sync {
    /// Produces note text for a symbol given its display name.
    fn generate(&self, symbol: &str, name: &str) -> CatalogResult<String>;

    /// A short, stable identifier for diagnostics and tracing.
    fn id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_transliterator_yields_empty_reading() {
        let t = NullTransliterator;
        let reading = t
            .transliterate("中文", PhoneticMode::Full, " ")
            .expect("null transliterator never fails");
        assert!(reading.is_empty());
        assert_eq!(t.id(), "null");
    }

    #[test]
    fn phonetic_mode_equality() {
        assert_eq!(PhoneticMode::Full, PhoneticMode::Full);
        assert_ne!(PhoneticMode::Full, PhoneticMode::FirstLetter);
    }

    // Compile-time checks for trait object safety
    #[test]
    fn transliterator_trait_is_object_safe() {
        fn _takes_dyn_transliterator(_: &dyn Transliterator) {}
    }

    #[test]
    fn note_generator_trait_is_object_safe() {
        fn _takes_dyn_generator(_: &dyn NoteGenerator) {}
    }
}
