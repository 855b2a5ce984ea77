//! Core types, errors, and capability traits for the glyphdex catalog engine.
//!
//! This crate defines the canonical record shape ([`SymbolRecord`],
//! [`Dataset`]), the unified error type ([`CatalogError`]), the injected
//! capabilities ([`Transliterator`], [`NoteGenerator`]), content scoring, and
//! the tracing conventions used across all glyphdex crates.
//!
//! It has minimal external dependencies and is intended to be depended on by
//! every other crate in the workspace.

pub mod error;
pub mod tracing_config;
pub mod traits;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use traits::{NoteGenerator, NullTransliterator, PhoneticMode, Transliterator};
pub use types::{
    format_code_point, parse_hex_group, utf16_len, Dataset, SymbolRecord, DEFAULT_VERSION,
};
