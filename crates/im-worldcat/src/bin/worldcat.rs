//! Command-line catalog lookup
//!
//! Usage:
//!   worldcat resolve --isbn 9780585030159 --oclc 42854423
//!   worldcat resolve --items items.json --config ./worldcat.toml
//!   worldcat session
//!
//! Prints one JSON line per record disposition on stdout. Exit codes:
//! 0 on success (including zero results), 1 when no session could be
//! obtained or the config is unusable, 2 when no usable identifier was given.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use im_worldcat::{
    parse_items, CatalogConfig, HttpClient, IdentifierBatch, IdentifierResolver,
    RecordDisposition, RecordSink, ResolveError, SearchItem,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "worldcat")]
#[command(about = "Resolve ISBNs and OCLC numbers against WorldCat")]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up identifiers and print their records
    Resolve {
        /// ISBN-10 or ISBN-13, in any common notation
        #[arg(long = "isbn")]
        isbns: Vec<String>,

        /// OCLC record number
        #[arg(long = "oclc")]
        oclc_numbers: Vec<String>,

        /// JSON file with one search item or an array of them
        #[arg(long)]
        items: Option<PathBuf>,
    },
    /// Bootstrap a session and print its token
    Session,
}

/// Writes each disposition to stdout as it arrives
struct JsonLines;

impl RecordSink for JsonLines {
    fn accept(&mut self, disposition: RecordDisposition) {
        match serde_json::to_string(&disposition) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!(error = %e, "failed to serialize record"),
        }
    }
}

fn collect_items(
    isbns: Vec<String>,
    oclc_numbers: Vec<String>,
    items: Option<PathBuf>,
) -> Result<Vec<SearchItem>, String> {
    let mut collected: Vec<SearchItem> = isbns.into_iter().map(SearchItem::with_isbn).collect();
    collected.extend(oclc_numbers.into_iter().map(SearchItem::with_oclc));

    if let Some(path) = items {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let parsed = parse_items(&content).map_err(|e| format!("{}: {}", path.display(), e))?;
        collected.extend(parsed);
    }

    Ok(collected)
}

fn load_config(path: Option<PathBuf>) -> Result<CatalogConfig, String> {
    match path {
        Some(path) => CatalogConfig::load(path),
        None => CatalogConfig::load_default(),
    }
    .map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match load_config(args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match HttpClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let resolver = IdentifierResolver::new(client, config);

    let result = match args.command {
        Command::Session => resolver.session().await.map(|session| {
            println!("{}", session.token());
        }),
        Command::Resolve {
            isbns,
            oclc_numbers,
            items,
        } => {
            let items = match collect_items(isbns, oclc_numbers, items) {
                Ok(items) => items,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let batch = IdentifierBatch::from_items(&items);
            resolver.resolve(&batch, &mut JsonLines).await.map(|summary| {
                if summary.is_empty() {
                    eprintln!("No identifiers could be resolved");
                }
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(ResolveError::NoSession { attempts }) => {
            eprintln!("Error: no session could be established");
            for attempt in &attempts {
                eprintln!("  {}", attempt);
            }
            ExitCode::from(1)
        }
        Err(e @ ResolveError::EmptyBatch) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
