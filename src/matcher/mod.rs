// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase matching: exact scan, fuzzy sliding window, and the JSON boundary.
//!
//! Both strategies are pure functions of `(text, phrase[, threshold])`. No
//! state survives a call, so they are safe to call from any number of threads.
//!
//! | Strategy | Reports                           | Score |
//! |----------|-----------------------------------|-------|
//! | Exact    | every literal occurrence, overlaps included | none  |
//! | Fuzzy    | every window scoring >= threshold | 3 d.p. |

mod exact;
mod fuzzy;

pub use exact::exact_matches;
pub use fuzzy::{
    best_matches, fuzzy_matches, fuzzy_matches_sequential, max_distance, window_score,
    DEFAULT_THRESHOLD,
};

use crate::error::Result;
use crate::types::MatchRecord;

/// Which strategy to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchMode {
    /// Literal occurrences only.
    Exact,
    /// Phrase-sized windows scoring at least `threshold`.
    Fuzzy { threshold: f64 },
}

impl MatchMode {
    /// Fuzzy matching at [`DEFAULT_THRESHOLD`].
    pub fn fuzzy_default() -> Self {
        MatchMode::Fuzzy {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Mode from the `fuzzy` flag plus threshold pair used at the JSON boundary.
    pub fn from_flag(fuzzy: bool, threshold: f64) -> Self {
        if fuzzy {
            MatchMode::Fuzzy { threshold }
        } else {
            MatchMode::Exact
        }
    }
}

/// Run the strategy selected by `mode`.
pub fn find_matches(text: &str, phrase: &str, mode: MatchMode) -> Vec<MatchRecord> {
    match mode {
        MatchMode::Exact => exact_matches(text, phrase),
        MatchMode::Fuzzy { threshold } => fuzzy_matches(text, phrase, threshold),
    }
}

/// Encode match records as a pretty-printed JSON array.
///
/// Always an array, even for zero or one record.
pub fn to_json(records: &[MatchRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Run exact or fuzzy matching and return the records as a JSON array.
///
/// `threshold` is ignored when `fuzzy` is false; [`DEFAULT_THRESHOLD`] is the
/// conventional value otherwise.
///
/// ```
/// let json = phrasefind::find_offsets_json("abcabc", "abc", false, 0.8).unwrap();
/// let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
/// assert_eq!(parsed, serde_json::json!([
///     {"offset": 0, "length": 3},
///     {"offset": 3, "length": 3},
/// ]));
/// ```
pub fn find_offsets_json(text: &str, phrase: &str, fuzzy: bool, threshold: f64) -> Result<String> {
    to_json(&find_matches(text, phrase, MatchMode::from_flag(fuzzy, threshold)))
}
