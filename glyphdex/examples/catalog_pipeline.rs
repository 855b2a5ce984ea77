//! Full pipeline demo: ingest a foreign emoji export and a native dataset,
//! augment Chinese search terms with pinyin, run a few queries, and print
//! the canonical export.
//!
//! Run with: `cargo run --example catalog_pipeline`

use glyphdex::prelude::*;

/// Tiny fixed-table transliterator standing in for a real pinyin service.
struct DemoPinyin;

fn syllable(c: char) -> Option<&'static str> {
    match c {
        '中' => Some("zhong"),
        '文' => Some("wen"),
        '符' => Some("fu"),
        '号' => Some("hao"),
        _ => None,
    }
}

impl Transliterator for DemoPinyin {
    fn transliterate(
        &self,
        text: &str,
        mode: PhoneticMode,
        separator: &str,
    ) -> CatalogResult<String> {
        let readings: Vec<String> = text
            .chars()
            .map(|c| match (syllable(c), mode) {
                (Some(s), PhoneticMode::Full) => s.to_owned(),
                (Some(s), PhoneticMode::FirstLetter) => s[..1].to_owned(),
                (None, _) => c.to_string(),
            })
            .collect();
        Ok(readings.join(separator))
    }

    fn id(&self) -> &str {
        "demo-pinyin"
    }
}

const NATIVE_DOC: &str = r#"{
  "version": "1.0.0-beta",
  "symbols": [
    {
      "symbol": "中",
      "name": "middle",
      "pronunciation": "zhōng",
      "category": ["cjk"],
      "searchTerms": ["中", "符号"]
    },
    { "symbol": "€", "description": "Euro sign", "category": ["currency"] }
  ]
}"#;

fn main() -> CatalogResult<()> {
    // 1. Ingest and augment.
    let dataset = normalize_str(NATIVE_DOC)?;
    let dataset = augment_dataset(&dataset, &DemoPinyin);
    println!(
        "ingested {} records at version {}",
        dataset.len(),
        dataset.version
    );

    // 2. A few queries across all three classes.
    for raw in ["zhong", "fuhao", "euro", "U+4E2D", "4E00-9FFF", "2000-20FF"] {
        let query = Query::parse(raw);
        let hits = search(&dataset, &query, &DemoPinyin);
        let symbols: Vec<&str> = hits.symbols.iter().map(|r| r.symbol.as_str()).collect();
        println!("{raw:>12} ({}) -> {symbols:?}", query.class());
    }

    // 3. Sorted views.
    let by_code_point = sort_by_code_point(&dataset);
    let ordered: Vec<&str> = by_code_point
        .symbols
        .iter()
        .map(|r| r.symbol.as_str())
        .collect();
    println!("by code point: {ordered:?}");

    // 4. Canonical export.
    println!("{}", export_json(&dataset)?);
    Ok(())
}
