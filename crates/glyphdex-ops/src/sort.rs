//! Three stable total orderings over the record list.
//!
//! Each sort is a pure function returning a freshly ordered copy; group and
//! frequency statistics are recomputed from the full input on every call, so
//! no state survives between invocations.
//!
//! Locale-aware tie-breaks (category labels, symbols within a group, names)
//! go through a fixed `zh` collation so sort output is reproducible across
//! platforms instead of depending on the ambient host locale.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed};
use icu::locale::locale;
use tracing::debug;

use glyphdex_core::{utf16_len, Dataset, SymbolRecord};

static COLLATOR: LazyLock<CollatorBorrowed<'static>> = LazyLock::new(|| {
    Collator::try_new(locale!("zh").into(), CollatorOptions::default())
        .expect("compiled collation data for locale zh")
});

fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.compare(a, b)
}

fn first_category(record: &SymbolRecord) -> &str {
    record.category.first().map_or("", String::as_str)
}

/// Ascending by notes length in UTF-16 code units; equal lengths keep their
/// original relative order.
#[must_use]
pub fn sort_by_notes_length(dataset: &Dataset) -> Dataset {
    let mut symbols = dataset.symbols.clone();
    symbols.sort_by_key(|record| utf16_len(&record.notes));

    debug!(
        target: "glyphdex.sort",
        ordering = "notes_length",
        record_count = symbols.len(),
        "records sorted"
    );
    dataset.with_symbols(symbols)
}

/// Groups records by their first category label (empty if absent): larger
/// groups first, label collation breaking count ties, symbol collation
/// ordering records within a group.
#[must_use]
pub fn sort_by_category(dataset: &Dataset) -> Dataset {
    let mut group_sizes: HashMap<&str, usize> = HashMap::new();
    for record in &dataset.symbols {
        *group_sizes.entry(first_category(record)).or_insert(0) += 1;
    }

    let mut symbols = dataset.symbols.clone();
    symbols.sort_by(|a, b| {
        let label_a = first_category(a);
        let label_b = first_category(b);
        group_sizes[label_b]
            .cmp(&group_sizes[label_a])
            .then_with(|| collate(label_a, label_b))
            .then_with(|| collate(&a.symbol, &b.symbol))
    });

    debug!(
        target: "glyphdex.sort",
        ordering = "category",
        record_count = symbols.len(),
        "records sorted"
    );
    dataset.with_symbols(symbols)
}

/// Ascending by the first code point of `symbol`, name collation breaking
/// ties.
#[must_use]
pub fn sort_by_code_point(dataset: &Dataset) -> Dataset {
    let mut symbols = dataset.symbols.clone();
    symbols.sort_by(|a, b| {
        let point_a = a.first_code_point().unwrap_or(u32::MAX);
        let point_b = b.first_code_point().unwrap_or(u32::MAX);
        point_a
            .cmp(&point_b)
            .then_with(|| collate(&a.name, &b.name))
    });

    debug!(
        target: "glyphdex.sort",
        ordering = "code_point",
        record_count = symbols.len(),
        "records sorted"
    );
    dataset.with_symbols(symbols)
}
