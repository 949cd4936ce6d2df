use clap::Parser;
use searcher::{Config, SearchEngine, Session, SessionOptions};
use searcher_core::catalog::{self, CatalogSource};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "searcher", about = "Search a catalog: words are OR-ed, '+' joins words with AND")]
struct Cli {
    /// JSON catalog of {"label", "value"} records (overrides the config file).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Answer a single query and exit instead of reading queries from stdin.
    #[arg(long, short)]
    query: Option<String>,

    /// Print the number of results after each answer.
    #[arg(long)]
    count: bool,

    /// Write debug logs to /tmp/searcher-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/searcher-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("searcher debug log started — tail -f /tmp/searcher-debug.log");
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config load failed, using defaults");
        Config::defaults()
    });

    let path = cli.catalog.as_deref().or_else(|| config.catalog.path());
    let catalog = catalog::resolve(path)?;
    if let CatalogSource::Fallback(_) = &catalog.source {
        eprintln!("Catalog not found, using {}", catalog.source);
    }
    tracing::info!(source = %catalog.source, entries = catalog.entries.len(), "catalog ready");

    let mut options = SessionOptions::from(&config.output);
    options.show_count |= cli.count;
    let session = Session::new(SearchEngine::new(catalog.entries), options);

    let stdout = std::io::stdout();
    match cli.query {
        Some(query) => {
            let mut out = stdout.lock();
            session.respond(&query, &mut out)?;
            out.flush()?;
        }
        None => {
            session.run(std::io::stdin().lock(), stdout.lock())?;
        }
    }

    Ok(())
}
