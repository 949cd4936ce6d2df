//! Catalogs and query tables used across harnesses.

use searcher_core::{catalog, SearchEngine};
use std::path::{Path, PathBuf};

/// Engine over the built-in 243-entry country catalog.
pub fn country_engine() -> SearchEngine {
    let entries = catalog::builtin().expect("built-in catalog must decode");
    assert_eq!(entries.len(), 243, "built-in catalog size changed");
    SearchEngine::new(entries)
}

/// A handful of entries with overlapping words, small enough to reason about
/// by hand.
pub const SMALL_CATALOG: &[&str] = &[
    "AE - United Arab Emirates",
    "GB - United Kingdom",
    "TH - Thailand",
    "US - United States",
    "VN - Vietnam",
];

pub fn small_engine() -> SearchEngine {
    SearchEngine::new(SMALL_CATALOG.iter().copied())
}

/// Blank queries: whitespace only.
pub const BLANK_QUERIES: &[&str] = &["", " ", "   ", "     ", "\t", " \n "];

/// Queries that contain nothing but `+` and whitespace.
pub const PLUS_ONLY_QUERIES: &[&str] = &["+", " +", "+ ", " + ", "  +  ", "++", " + + ++ "];

/// Write `records` as a JSON country catalog into `dir` and return its path.
pub fn write_catalog(dir: &Path, records: &[(&str, &str)]) -> PathBuf {
    let json: Vec<serde_json::Value> = records
        .iter()
        .map(|(value, label)| serde_json::json!({ "value": value, "label": label }))
        .collect();
    let path = dir.join("countries.json");
    std::fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();
    path
}
