//! Domain-specific assertion macros for searcher harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! name the query and the result list that broke an invariant.

// ---------------------------------------------------------------------------
// Result shape
// ---------------------------------------------------------------------------

/// Assert that a result list has no repeated entries.
///
/// ```rust
/// assert_no_duplicates!(engine.search("united viet kingdom"));
/// ```
#[macro_export]
macro_rules! assert_no_duplicates {
    ($results:expr) => {{
        let results: &[String] = &$results;
        let mut seen = std::collections::HashSet::new();
        for entry in results {
            if !seen.insert(entry.as_str()) {
                panic!(
                    "assert_no_duplicates! failed: {:?} appears more than once.\n  results: {:?}",
                    entry, results
                );
            }
        }
    }};
}

/// Assert that every result is an entry of the engine's catalog.
#[macro_export]
macro_rules! assert_subset_of_catalog {
    ($engine:expr, $results:expr) => {{
        let engine: &searcher_core::SearchEngine = &$engine;
        let results: &[String] = &$results;
        for entry in results {
            if !engine.catalog().contains(entry) {
                panic!(
                    "assert_subset_of_catalog! failed: {:?} is not in the catalog.",
                    entry
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Query helpers
// ---------------------------------------------------------------------------

/// Assert that every query in a table yields the same expected results.
pub fn assert_all_queries(engine: &searcher_core::SearchEngine, queries: &[&str], expected: &[&str]) {
    for query in queries {
        let results = engine.search(query);
        pretty_assertions::assert_eq!(results, expected, "query {:?}", query);
    }
}

/// Assert that a query returns nothing.
pub fn assert_empty(engine: &searcher_core::SearchEngine, query: &str) {
    let results = engine.search(query);
    assert!(
        results.is_empty(),
        "expected no results for {:?}, got {:?}",
        query,
        results
    );
}
