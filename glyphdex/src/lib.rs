//! glyphdex: a catalog curation engine for symbolic characters.
//!
//! Ingests heterogeneous JSON shapes (native datasets or foreign emoji
//! exports) into one canonical record format, answers fuzzy multi-field
//! queries (including CJK phonetic matching and Unicode code-point range
//! queries), deduplicates records by content richness, and produces three
//! stable total orderings.
//!
//! Every top-level operation is a pure `Dataset -> Dataset` function; the
//! [`ops::CatalogStore`] installs results atomically so readers never see an
//! intermediate state. Transliteration and note generation are injected
//! capabilities ([`core::Transliterator`], [`core::NoteGenerator`]), and a
//! failed transliteration degrades to non-phonetic matching instead of
//! aborting a search.
//!
//! # Example
//!
//! ```
//! use glyphdex::prelude::*;
//!
//! let dataset = normalize_str(r#"{ "symbols": [
//!     { "symbol": "€", "name": "Euro sign", "category": ["currency"] }
//! ] }"#)?;
//!
//! let hits = search(&dataset, &Query::parse("curren"), &NullTransliterator);
//! assert_eq!(hits.symbols[0].symbol, "€");
//! # Ok::<(), CatalogError>(())
//! ```

pub use glyphdex_core as core;
pub use glyphdex_ingest as ingest;
pub use glyphdex_ops as ops;
pub use glyphdex_search as search;

/// Everything needed for the common ingest -> search -> sort -> export flow.
pub mod prelude {
    pub use glyphdex_core::{
        format_code_point, utf16_len, CatalogError, CatalogResult, Dataset, NoteGenerator,
        NullTransliterator, PhoneticMode, SymbolRecord, Transliterator, DEFAULT_VERSION,
    };
    pub use glyphdex_ingest::{dedup_by_content, export, export_json, normalize, normalize_str};
    pub use glyphdex_ops::{
        add_system_range, bump_version, delete_record, generate_notes, remove_system_range,
        reset_search_terms, sort_by_category, sort_by_code_point, sort_by_notes_length,
        upsert_record, CatalogStore, StoreConfig, VersionPart,
    };
    pub use glyphdex_search::{augment_dataset, augment_record, search, Query};
}
