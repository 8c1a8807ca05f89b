//! Command-line ISBN hyphenation
//!
//! Usage:
//!   im-isbn hyphenate 9780585030159          # 978-0-585-03015-9
//!   im-isbn hyphenate --json "ISBN 0-8044-2957-X"
//!   im-isbn check 9780585030159 0306406151

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use im_isbn::{clean_isbn, is_valid_isbn, split_isbn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "im-isbn")]
#[command(about = "Hyphenate and validate ISBNs")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Clean each input and print its hyphenated form
    Hyphenate {
        /// Raw ISBNs (hyphens and spaces are ignored)
        #[arg(required = true)]
        isbns: Vec<String>,

        /// Print segments as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Report whether each input has a valid checksum
    Check {
        #[arg(required = true)]
        isbns: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Hyphenate { isbns, json } => {
            let mut failed = false;
            for raw in &isbns {
                let Some(bare) = clean_isbn(raw) else {
                    eprintln!("{}: not a valid ISBN", raw);
                    failed = true;
                    continue;
                };

                match split_isbn(&bare) {
                    Some(parts) if json => match serde_json::to_string(&parts) {
                        Ok(line) => println!("{}", line),
                        Err(e) => {
                            eprintln!("{}: {}", raw, e);
                            failed = true;
                        }
                    },
                    Some(parts) => println!("{}", parts),
                    None => {
                        tracing::warn!(isbn = %bare, "no range covers ISBN");
                        println!("{}", bare);
                    }
                }
            }
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Command::Check { isbns } => {
            let mut all_valid = true;
            for raw in &isbns {
                let valid = is_valid_isbn(raw);
                all_valid &= valid;
                println!("{}\t{}", raw, if valid { "valid" } else { "invalid" });
            }
            if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
