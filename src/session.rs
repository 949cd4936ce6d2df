//! Query session — feeds raw query strings to the engine and renders results.
//!
//! Each input line is one raw query. The line is handed to the engine as-is;
//! trimming, `+` grouping and case folding all happen in
//! [`Query::parse`](searcher_core::Query::parse).

use searcher_core::config::OutputConfig;
use searcher_core::{Query, SearchEngine};
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Rendering options for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Print `(N results)` after each answer.
    pub show_count: bool,
    /// Printed instead of an empty result list.
    pub nothing_found: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for SessionOptions {
    fn from(output: &OutputConfig) -> Self {
        Self {
            show_count: output.show_count,
            nothing_found: output.nothing_found.clone(),
        }
    }
}

pub struct Session {
    engine: SearchEngine,
    options: SessionOptions,
}

impl Session {
    pub fn new(engine: SearchEngine, options: SessionOptions) -> Self {
        Self { engine, options }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Answer one raw query.
    pub fn answer(&self, raw: &str) -> Vec<String> {
        self.engine.search(raw)
    }

    /// Answer one raw query and write the rendered block to `out`.
    ///
    /// Returns `false` when the query normalised to nothing; in that case
    /// nothing is written.
    pub fn respond<W: Write>(&self, raw: &str, out: &mut W) -> std::io::Result<bool> {
        let query = Query::parse(raw);
        if query.is_empty() {
            tracing::debug!(raw, "skipping empty query");
            return Ok(false);
        }

        let results = self.engine.search_parsed(&query);
        if results.is_empty() {
            writeln!(out, "{}", self.options.nothing_found)?;
        }
        for entry in &results {
            writeln!(out, "{entry}")?;
        }
        if self.options.show_count {
            let noun = if results.len() == 1 { "result" } else { "results" };
            writeln!(out, "({} {noun})", results.len())?;
        }
        writeln!(out)?;
        Ok(true)
    }

    /// Answer every line of `input` until EOF. Returns the number of
    /// non-empty queries answered.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and still answered.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> anyhow::Result<usize> {
        let mut answered = 0;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                tracing::warn!(bytes = buf.len(), "query line is not valid UTF-8, decoding lossily");
            }
            let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
            if self.respond(line, &mut output)? {
                answered += 1;
            }
            output.flush()?;
        }
        tracing::debug!(answered, "input exhausted");
        Ok(answered)
    }
}
