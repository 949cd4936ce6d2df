//! Catalog provisioning — turns country records into catalog entries.
//!
//! The search engine only needs an ordered list of strings. This module
//! supplies one from a JSON file of `{ "label", "value" }` records, from the
//! country list compiled into the crate, or from a short fallback list used
//! when a configured file is missing.

use crate::types::{CatalogError, Country};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded data
// ---------------------------------------------------------------------------

const BUILTIN_COUNTRIES: &str = include_str!("../assets/countries.json");

const FALLBACK_CHEESES: &[&str] = &[
    "Abbaye de Belloc",
    "Abbaye du Mont des Cats",
    "Appenzeller",
    "Bavarian Bergkase",
    "Brie de Meaux",
    "Caerphilly",
    "Camembert de Normandie",
    "Cheddar",
    "Comte",
    "Emmental",
    "Feta",
    "Gorgonzola",
    "Gouda",
    "Gruyere",
    "Halloumi",
    "Manchego",
    "Mozzarella",
    "Parmigiano Reggiano",
    "Pecorino Romano",
    "Roquefort",
    "Stilton",
    "Taleggio",
];

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Where a resolved catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
    /// A file was configured but not found.
    Fallback(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "built-in countries"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Fallback(path) => {
                write!(f, "fallback cheeses ({} not found)", path.display())
            }
        }
    }
}

/// An ordered list of entries together with its origin.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub entries: Vec<String>,
    pub source: CatalogSource,
}

/// Pick the catalog for an optional configured path.
///
/// No path selects the built-in list. A path that does not exist falls back
/// to the cheese list with a warning; any other failure is returned.
pub fn resolve(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let Some(path) = path else {
        return Ok(Catalog {
            entries: builtin()?,
            source: CatalogSource::Builtin,
        });
    };

    match load(path) {
        Ok(entries) => Ok(Catalog {
            entries,
            source: CatalogSource::File(path.to_path_buf()),
        }),
        Err(CatalogError::NotFound(missing)) => {
            tracing::warn!(path = %missing.display(), "catalog not found, using fallback cheeses");
            Ok(Catalog {
                entries: fallback(),
                source: CatalogSource::Fallback(missing),
            })
        }
        Err(err) => Err(err),
    }
}

/// Read and decode a JSON catalog file.
pub fn load(path: &Path) -> Result<Vec<String>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let entries = from_json(&json)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "catalog loaded");
    Ok(entries)
}

/// Decode a JSON array of country records, preserving order.
///
/// Records missing a code or a name are skipped.
pub fn from_json(json: &str) -> Result<Vec<String>, CatalogError> {
    let countries: Vec<Country> = serde_json::from_str(json)?;
    Ok(countries
        .iter()
        .filter_map(|country| {
            let entry = country.entry();
            if entry.is_none() {
                tracing::warn!(record = %country, "skipping incomplete catalog record");
            }
            entry
        })
        .collect())
}

/// The country list compiled into the crate.
pub fn builtin() -> Result<Vec<String>, CatalogError> {
    from_json(BUILTIN_COUNTRIES)
}

pub fn fallback() -> Vec<String> {
    FALLBACK_CHEESES.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
