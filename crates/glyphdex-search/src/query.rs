//! Query classification: range, single code point, or free text.
//!
//! Every raw query string resolves to exactly one class, tried in order:
//!
//! 1. **Range**: two groups of 4-5 hex digits separated by `-`
//!    (`0000-007F`, `4e00-9fff`). Bounds are inclusive and deliberately not
//!    validated for ordering: a reversed range is well-formed and matches
//!    nothing.
//! 2. **Code point**: `u` or `U+` followed by 4 or more hex digits
//!    (`U+4E2D`, `u1f600`).
//! 3. **Free text**: everything else. Both a lowercased form and a
//!    whitespace-stripped form are retained so phonetic strings match whether
//!    or not they were typed with syllable spacing.
//!
//! Classification is total; free text is the universal fallback.

use std::fmt;

use glyphdex_core::{format_code_point, parse_hex_group};

/// An interpreted search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Inclusive code-point range; `start > end` matches nothing.
    Range {
        /// Lower bound (inclusive).
        start: u32,
        /// Upper bound (inclusive).
        end: u32,
    },
    /// A single code point.
    CodePoint(u32),
    /// Free text in two match forms.
    Text {
        /// The trimmed, lowercased query.
        lowered: String,
        /// The lowered query with all whitespace removed.
        compact: String,
    },
}

impl Query {
    /// Classifies a raw query string. Total: never fails.
    ///
    /// Range and code-point classification run on the trimmed input; case is
    /// irrelevant throughout.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some((start, end)) = parse_range(trimmed) {
            return Self::Range { start, end };
        }
        if let Some(code_point) = parse_code_point(trimmed) {
            return Self::CodePoint(code_point);
        }
        let lowered = trimmed.to_lowercase();
        let compact = lowered.chars().filter(|c| !c.is_whitespace()).collect();
        Self::Text { lowered, compact }
    }

    /// Whether this query's numeric criterion accepts `code_point`.
    ///
    /// Free-text queries have no numeric criterion and always return `false`
    /// here; they are matched against record content instead.
    #[must_use]
    pub fn matches_code_point(&self, code_point: u32) -> bool {
        match *self {
            Self::Range { start, end } => code_point >= start && code_point <= end,
            Self::CodePoint(wanted) => code_point == wanted,
            Self::Text { .. } => false,
        }
    }

    /// Short class label for diagnostics and tracing.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Range { .. } => "range",
            Self::CodePoint(_) => "code_point",
            Self::Text { .. } => "text",
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { start, end } => write!(f, "{start:04X}-{end:04X}"),
            Self::CodePoint(code_point) => write!(f, "{}", format_code_point(*code_point)),
            Self::Text { lowered, .. } => write!(f, "{lowered}"),
        }
    }
}

fn parse_range(text: &str) -> Option<(u32, u32)> {
    let (lo, hi) = text.split_once('-')?;
    Some((parse_hex_group(lo, 4, 5)?, parse_hex_group(hi, 4, 5)?))
}

fn parse_code_point(text: &str) -> Option<u32> {
    let rest = text.strip_prefix(['u', 'U'])?;
    let digits = rest.strip_prefix('+').unwrap_or(rest);
    parse_hex_group(digits, 4, usize::MAX)
}
