//! Unified error type for the glyphdex catalog pipeline.
//!
//! Every variant carries an actionable message guiding the consumer toward
//! resolution. Callers degrade gracefully where the contract allows it:
//! a [`CatalogError::Transliteration`] failure never aborts a search; the
//! matcher simply falls back to non-phonetic fields.

/// Unified error type covering all failure modes across the glyphdex pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    // === Ingestion errors ===
    /// The ingested document matches neither known schema.
    ///
    /// Raised after shape detection fails; no partial dataset is produced and
    /// any previously loaded dataset remains untouched.
    #[error(
        "Unrecognized document shape: expected a native dataset (top-level \"symbols\" array) or an emoji export (\"emojis\"/\"data\" key, or a bare array)."
    )]
    UnrecognizedShape,

    /// The input text is not valid JSON at all.
    #[error("Malformed JSON: {0}. Nothing was imported.")]
    Json(#[from] serde_json::Error),

    // === Maintenance errors ===
    /// A system range string does not match the `XXXX-YYYY` hex syntax.
    #[error(
        "Invalid system range \"{value}\": expected two groups of 4-5 hex digits separated by '-', e.g. \"0000-007F\"."
    )]
    InvalidRange {
        /// The rejected input.
        value: String,
    },

    // === Capability errors ===
    /// The transliteration service failed.
    ///
    /// Search callers treat this as an empty expansion and keep matching on
    /// non-phonetic fields; persistent augmentation leaves the record as-is.
    #[error("Transliteration failed: {source}")]
    Transliteration {
        /// The underlying service error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The note-generation service failed.
    ///
    /// Only editor-level code calls this capability; the error propagates to
    /// the editor caller and never into the pure pipeline.
    #[error("Note generation failed for symbol \"{symbol}\": {source}")]
    NoteGeneration {
        /// The symbol a note was requested for.
        symbol: String,
        /// The underlying service error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience alias used throughout the glyphdex crate hierarchy.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogError>();
    }

    #[test]
    fn json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("must not parse");
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().contains("Nothing was imported"));
    }

    #[test]
    fn display_messages_are_actionable() {
        let msg = CatalogError::UnrecognizedShape.to_string();
        assert!(msg.contains("symbols"), "should name the expected shape");

        let msg = CatalogError::InvalidRange {
            value: "12G4-0000".into(),
        }
        .to_string();
        assert!(msg.contains("12G4-0000"));
        assert!(msg.contains("0000-007F"), "should show a valid example");
    }

    #[test]
    fn transliteration_preserves_source() {
        let inner = std::io::Error::other("service unreachable");
        let err = CatalogError::Transliteration {
            source: Box::new(inner),
        };
        assert!(err.to_string().contains("service unreachable"));
    }

    #[test]
    fn catalog_result_alias_works() {
        let ok: CatalogResult<u32> = Ok(42);
        assert!(ok.is_ok());

        let err: CatalogResult<u32> = Err(CatalogError::UnrecognizedShape);
        assert!(err.is_err());
    }
}
