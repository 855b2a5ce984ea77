//! Sort engine, dataset maintenance operations, and the cached store for
//! glyphdex.
//!
//! Everything here is a pure `Dataset -> Dataset` transformation except
//! [`CatalogStore`], which is the one place a dataset is *installed*: the
//! store swaps whole datasets atomically and hands out `Arc` snapshots, so
//! readers never observe a half-applied operation.

pub mod editor;
pub mod ranges;
pub mod sort;
pub mod storage;
pub mod version;

pub use editor::{delete_record, generate_notes, reset_search_terms, upsert_record};
pub use ranges::{add_system_range, is_valid_range, remove_system_range};
pub use sort::{sort_by_category, sort_by_code_point, sort_by_notes_length};
pub use storage::{CatalogStore, StoreConfig};
pub use version::{bump_version, VersionPart};
