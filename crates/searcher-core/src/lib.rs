//! searcher-core — token search over a fixed catalog.
//!
//! This crate exposes the search engine, the catalog provisioning helpers and
//! the configuration layer as public modules, plus the shared types used by
//! all of them.
//!
//! # Architecture
//!
//! ```text
//! catalog ──► SearchEngine ◄── Query::parse(raw)
//!                  │
//!                  └──► Vec<String> (ordered, deduplicated)
//! ```
//!
//! The engine is a pure function of `(catalog, query)`. Everything fallible
//! (reading files, decoding JSON, loading config) happens before it is built.

pub mod catalog;
pub mod config;
pub mod search;
pub mod types;

pub use catalog::{Catalog, CatalogSource};
pub use search::{Query, SearchEngine};
pub use types::{CatalogError, Country};
