//! Core types for searcher-core.
//!
//! This module defines the catalog record decoded from JSON, [`Country`], and
//! the error type for everything that can go wrong while provisioning a
//! catalog, [`CatalogError`]. The search engine itself has no error type.

use serde::Deserialize;
use std::path::PathBuf;

/// One record of a country catalog file.
///
/// Both fields are optional in the file format; a record only becomes a
/// catalog entry when both are present (see [`Country::entry`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    /// Human-readable name, e.g. `Thailand`.
    #[serde(default)]
    pub label: Option<String>,
    /// Short code, e.g. `TH`.
    #[serde(default)]
    pub value: Option<String>,
}

impl Country {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: Some(value.into()),
        }
    }

    /// Render the record as a catalog entry, `"{value} - {label}"`.
    pub fn entry(&self) -> Option<String> {
        match (&self.value, &self.label) {
            (Some(value), Some(label)) => Some(format!("{value} - {label}")),
            _ => None,
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.value.as_deref().unwrap_or("?"),
            self.label.as_deref().unwrap_or("?")
        )
    }
}

/// Errors raised while reading or decoding a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
