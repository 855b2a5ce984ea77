//! Query interpretation, phonetic expansion, and record matching for
//! glyphdex.
//!
//! A raw query string is classified by [`Query::parse`] into a code-point
//! range, a single code point, or free text; [`search`] then filters the
//! record list, expanding ideograph-bearing content through the injected
//! [`glyphdex_core::Transliterator`] so CJK records match Latin-alphabet
//! queries.

pub mod matcher;
pub mod phonetic;
pub mod query;

pub use matcher::{record_matches, search};
pub use phonetic::{
    augment_dataset, augment_record, contains_ideograph, is_ideograph, phonetic_variants,
    SYLLABLE_SEPARATOR,
};
pub use query::Query;
