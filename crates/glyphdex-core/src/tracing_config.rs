//! Tracing conventions for glyphdex.
//!
//! glyphdex emits structured events through `tracing` but never installs a
//! subscriber: consumers bring their own. This module pins the target prefix
//! and the span/field names so logs stay queryable across the pipeline.

use tracing::Level;

/// Target prefix used by all glyphdex tracing spans and events.
///
/// Consumers can use this to filter glyphdex logs:
/// ```text
/// RUST_LOG=glyphdex=debug
/// ```
pub const TARGET_PREFIX: &str = "glyphdex";

/// Standard tracing span names used across the pipeline.
pub mod span_names {
    /// Schema normalization of an ingested document.
    pub const NORMALIZE: &str = "glyphdex::normalize";
    /// One search pass over the record list.
    pub const SEARCH: &str = "glyphdex::search";
    /// Persistent phonetic augmentation of stored search terms.
    pub const AUGMENT: &str = "glyphdex::augment";
    /// Export-time dedup by content score.
    pub const DEDUP: &str = "glyphdex::dedup";
    /// One of the three sort operations.
    pub const SORT: &str = "glyphdex::sort";
}

/// Standard structured field names used in tracing events.
pub mod field_names {
    pub const SHAPE: &str = "shape";
    pub const QUERY_CLASS: &str = "query_class";
    pub const QUERY_LEN: &str = "query_len";
    pub const RECORD_COUNT: &str = "record_count";
    pub const RESULT_COUNT: &str = "result_count";
    pub const SKIPPED_COUNT: &str = "skipped_count";
    pub const DROPPED_COUNT: &str = "dropped_count";
    pub const VARIANT_COUNT: &str = "variant_count";
    pub const ORDERING: &str = "ordering";
    pub const PLATFORM: &str = "platform";
}

/// Parse a log level string (case-insensitive).
///
/// Recognized values: `trace`, `debug`, `info`, `warn`, `error`.
/// Returns `None` for unrecognized strings.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Returns the recommended `tracing::Level` for the given environment.
///
/// Checks `GLYPHDEX_LOG_LEVEL` first, then falls back to the provided
/// default.
#[must_use]
pub fn level_from_env(default: Level) -> Level {
    std::env::var("GLYPHDEX_LOG_LEVEL")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(default)
}
