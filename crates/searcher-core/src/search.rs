//! Search layer — token matching over a fixed catalog.
//!
//! A raw query is normalised into a [`Query`] and evaluated against the
//! catalog held by a [`SearchEngine`]:
//!
//! - `thai viet` — plain whitespace-separated words. Each word is matched on
//!   its own and the per-word matches are concatenated in word order.
//! - `united+kingdom` — `+` joins words into one predicate. An entry is kept
//!   only if it contains every word.
//!
//! Matching is case-insensitive substring containment. Results never repeat an
//! entry; the first occurrence wins.

use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A normalised search query.
///
/// Tokens are already trimmed, non-empty and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Nothing left after removing whitespace and `+`.
    Empty,
    /// No `+` in the query: each token matches independently.
    AnyOf(Vec<String>),
    /// At least one `+` in the query: an entry must match every token.
    AllOf(Vec<String>),
}

impl Query {
    /// Normalise a raw query string. Never fails.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Query::Empty;
        }

        // Runs of `+` produce empty groups, which contribute no tokens.
        let grouped = trimmed.contains('+');
        let tokens: Vec<String> = trimmed
            .split('+')
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect();

        match (tokens.is_empty(), grouped) {
            (true, _) => Query::Empty,
            (false, true) => Query::AllOf(tokens),
            (false, false) => Query::AnyOf(tokens),
        }
    }

    pub fn tokens(&self) -> &[String] {
        match self {
            Query::Empty => &[],
            Query::AnyOf(tokens) | Query::AllOf(tokens) => tokens.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Query::Empty)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Query::Empty => write!(f, "empty"),
            Query::AnyOf(tokens) => write!(f, "any({})", tokens.join(", ")),
            Query::AllOf(tokens) => write!(f, "all({})", tokens.join(", ")),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Immutable catalog plus the matching algorithm.
///
/// The catalog is fixed at construction. `search` borrows `&self`, so one
/// engine can be shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Vec<String>,
    /// Lower-cased shadow of `catalog`, index for index.
    folded: Vec<String>,
}

impl SearchEngine {
    pub fn new<I, S>(catalog: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let catalog: Vec<String> = catalog.into_iter().map(Into::into).collect();
        let folded = catalog.iter().map(|entry| entry.to_lowercase()).collect();
        tracing::debug!(entries = catalog.len(), "search engine built");
        Self { catalog, folded }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Search the catalog for a raw query string.
    ///
    /// Total over all inputs: blank or `+`-only queries return an empty list.
    pub fn search(&self, raw: &str) -> Vec<String> {
        self.search_parsed(&Query::parse(raw))
    }

    /// Evaluate an already-normalised query.
    pub fn search_parsed(&self, query: &Query) -> Vec<String> {
        let results = match query {
            Query::Empty => Vec::new(),
            Query::AnyOf(tokens) => self.any_of(tokens),
            Query::AllOf(tokens) => self.all_of(tokens),
        };
        tracing::debug!(query = %query, hits = results.len(), "search complete");
        results
    }

    /// Per-token matches concatenated in token order, first occurrence wins.
    fn any_of(&self, tokens: &[String]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut results = Vec::new();
        for token in tokens {
            for (entry, folded) in self.entries() {
                if folded.contains(token.as_str()) && seen.insert(entry) {
                    results.push(entry.to_string());
                }
            }
        }
        results
    }

    /// Entries containing every token, in catalog order.
    fn all_of(&self, tokens: &[String]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.entries()
            .filter(|(_, folded)| tokens.iter().all(|token| folded.contains(token.as_str())))
            .filter(|(entry, _)| seen.insert(*entry))
            .map(|(entry, _)| entry.to_string())
            .collect()
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.catalog
            .iter()
            .map(String::as_str)
            .zip(self.folded.iter().map(String::as_str))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
