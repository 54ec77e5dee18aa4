// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the phrasefind command-line interface.
//!
//! Two subcommands: `find` loads a text (a JSON document field or a plain
//! file) and locates a phrase in it, and `distance` prints the edit distance
//! between two strings. `find --json` emits the same array as
//! `find_offsets_json`, suitable for piping.

pub mod display;

use clap::{Parser, Subcommand};
use phrasefind::DEFAULT_THRESHOLD;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "phrasefind",
    about = "Locate exact or fuzzy occurrences of a phrase in text",
    version
)]
pub struct Cli {
    /// Log matcher internals to stderr (repeat for trace level)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a phrase in a text file
    Find {
        /// File holding the text (JSON document by default)
        file: PathBuf,

        /// Phrase to locate
        phrase: String,

        /// Tolerate spelling and OCR noise via edit distance
        #[arg(short, long)]
        fuzzy: bool,

        /// Minimum score (0.0-1.0) for a fuzzy window to count as a match
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// JSON key holding the text
        #[arg(long, default_value = phrasefind::source::DEFAULT_TEXT_FIELD)]
        field: String,

        /// Treat the file as plain text instead of JSON
        #[arg(long, conflicts_with = "field")]
        plain: bool,

        /// Keep only the best window from each overlapping cluster
        #[arg(long)]
        best: bool,

        /// Print the match array as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Print the edit distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,
    },
}
