//! searcher — token search over a fixed catalog.
//!
//! The library half of the binary. It exposes the [`session`] loop so that
//! integration tests can drive it with in-memory readers and writers.
//!
//! # Architecture
//!
//! ```text
//! stdin / --query ──► Session ──► SearchEngine ──► stdout
//!                                     ▲
//!               config + catalog ─────┘
//! ```
//!
//! Everything is synchronous; one query is answered before the next line is
//! read.

pub mod session;

pub use searcher_core::{config::Config, Query, SearchEngine};
pub use session::{Session, SessionOptions};
