// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Locate a short phrase inside a larger text, exactly or approximately.
//!
//! Built for finding mangled proper nouns in OCR output: give it the text and
//! the phrase you expect, get back character-offset spans you can highlight or
//! slice out.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────────┐     ┌──────────────┐
//! │ fuzzy::          │────▶│ matcher::fuzzy       │────▶│ matcher      │
//! │  levenshtein     │     │ (sliding window)     │     │ (MatchMode,  │
//! │ (edit distance)  │     └──────────────────────┘     │  JSON)       │
//! └──────────────────┘     ┌──────────────────────┐     │              │
//!                          │ matcher::exact       │────▶│              │
//!                          │ (overlapping find)   │     └──────────────┘
//!                          └──────────────────────┘            │
//!        ┌─────────────────────────────────────────────────────┘
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │ types: MatchRecord::{Exact, Fuzzy}, char_slice      │
//! │ contracts: debug-only checks on every result batch  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Units
//!
//! Offsets, lengths, and distances all count `char`s. No Unicode
//! normalization happens: `"é"` and `"e\u{301}"` are different inputs.
//!
//! # Usage
//!
//! ```
//! use phrasefind::{exact_matches, fuzzy_matches};
//!
//! let text = "The quick brown fox jumps over the lazy dog. The quack brown fix is swift.";
//!
//! assert!(exact_matches(text, "quick brown foxes").is_empty());
//!
//! let hits = fuzzy_matches(text, "quick brown foxes", 0.6);
//! assert!(hits.iter().any(|m| m.offset() == 4));
//! ```

pub mod contracts;
mod error;
pub mod fuzzy;
pub mod matcher;
pub mod source;
mod types;

// Re-exports for public API
pub use error::{Error, Result};
pub use fuzzy::{edit_distance, levenshtein, levenshtein_bounded, levenshtein_within};
pub use matcher::{
    best_matches, exact_matches, find_matches, find_offsets_json, fuzzy_matches,
    fuzzy_matches_sequential, to_json, MatchMode, DEFAULT_THRESHOLD,
};
pub use source::{load_text, TextSource};
pub use types::{char_slice, round_score, MatchRecord, SCORE_DECIMALS};

/// Edit distance between two strings in characters. Alias of [`levenshtein`].
#[inline]
pub fn distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}
