//! Schema normalization and canonical export for glyphdex.
//!
//! [`normalize`] turns an arbitrary ingested JSON document (native dataset or
//! foreign emoji export) into the canonical [`glyphdex_core::Dataset`];
//! [`export`] produces the deduplicated, field-ordered canonical view.
//! Re-importing an export reproduces the same records with no field loss.

pub mod export;
pub mod normalize;

pub use export::{dedup_by_content, export, export_json};
pub use normalize::{normalize, normalize_str};
