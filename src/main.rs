// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use phrasefind::{
    best_matches, find_matches, levenshtein, load_text, to_json, Error, MatchMode, TextSource,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "phrasefind=debug",
        _ => "phrasefind=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> phrasefind::Result<()> {
    match command {
        Commands::Find {
            file,
            phrase,
            fuzzy,
            threshold,
            field,
            plain,
            best,
            json,
        } => {
            if !threshold.is_finite() {
                return Err(Error::InvalidThreshold(threshold));
            }

            let source = if plain {
                TextSource::Plain
            } else {
                TextSource::JsonField(field)
            };
            let text = load_text(&file, &source)?;

            let mode = MatchMode::from_flag(fuzzy, threshold);
            let mut records = find_matches(&text, &phrase, mode);
            if best {
                records = best_matches(&records);
            }
            info!(file = %file.display(), matches = records.len(), "search finished");

            if json {
                let encoded = to_json(&records)?;
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", encoded).map_err(|source| Error::Io {
                    path: "<stdout>".into(),
                    source,
                })?;
            } else {
                display::print_matches(&text, &phrase, mode, &records);
            }
        }

        Commands::Distance { a, b } => {
            println!("{}", levenshtein(&a, &b));
        }
    }
    Ok(())
}
