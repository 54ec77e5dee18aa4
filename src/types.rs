// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match records: the only thing the matcher ever produces.
//!
//! Two shapes, one per strategy. Exact matches carry no score; fuzzy matches
//! always do. Modelling this as an enum keeps the optional `score` from leaking
//! into matcher logic, and the untagged serde representation gives the wire
//! shape callers expect:
//!
//! ```text
//! {"offset": 4, "length": 17}                 exact
//! {"offset": 4, "length": 17, "score": 0.882} fuzzy
//! ```
//!
//! # Units
//!
//! `offset` and `length` count characters (Unicode scalar values), never bytes.
//! Use [`MatchRecord::extract`] or [`char_slice`] to get the `&str` back out of
//! the original text. Byte slicing with these numbers is wrong for any
//! non-ASCII input.
//!
//! # Invariants
//!
//! - `length > 0` and `offset + length <= text.chars().count()`
//! - Exact: the slice equals the phrase
//! - Fuzzy: `score` is the rounded `(length - distance) / length`

use serde::{Deserialize, Serialize};

/// Decimal places kept in reported fuzzy scores.
pub const SCORE_DECIMALS: usize = 3;

/// One located occurrence of a phrase.
///
/// Field order within each variant is the serialized key order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchRecord {
    /// Fuzzy window that scored at or above the threshold.
    ///
    /// Listed first so deserializing an object that has a `score` picks this
    /// variant instead of silently dropping the field.
    Fuzzy {
        offset: usize,
        length: usize,
        score: f64,
    },
    /// Literal occurrence of the phrase.
    Exact { offset: usize, length: usize },
}

impl MatchRecord {
    /// Character index of the first matched symbol.
    #[inline]
    pub fn offset(&self) -> usize {
        match *self {
            MatchRecord::Exact { offset, .. } | MatchRecord::Fuzzy { offset, .. } => offset,
        }
    }

    /// Number of characters spanned (always the phrase length).
    #[inline]
    pub fn length(&self) -> usize {
        match *self {
            MatchRecord::Exact { length, .. } | MatchRecord::Fuzzy { length, .. } => length,
        }
    }

    /// One past the last matched character.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset() + self.length()
    }

    /// Rounded similarity score, present for fuzzy matches only.
    #[inline]
    pub fn score(&self) -> Option<f64> {
        match *self {
            MatchRecord::Exact { .. } => None,
            MatchRecord::Fuzzy { score, .. } => Some(score),
        }
    }

    #[inline]
    pub fn is_fuzzy(&self) -> bool {
        matches!(self, MatchRecord::Fuzzy { .. })
    }

    /// Do the spans of two records share at least one character?
    pub fn overlaps(&self, other: &MatchRecord) -> bool {
        self.offset() < other.end() && other.offset() < self.end()
    }

    /// Recover the matched text from the text this record was produced for.
    ///
    /// Returns `None` if the span does not fit `text`, which only happens when
    /// the record is applied to a different string than it was computed on.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        char_slice(text, self.offset(), self.length())
    }
}

/// Round a raw score to [`SCORE_DECIMALS`] places.
///
/// Rounds the exact binary value with ties to even, so `13/16 = 0.8125`
/// reports as `0.812`.
///
/// Only used for reporting. Threshold checks always see the unrounded value.
pub fn round_score(score: f64) -> f64 {
    format!("{:.*}", SCORE_DECIMALS, score)
        .parse()
        .unwrap_or(score)
}

/// Slice `text` by character offset and character length.
///
/// ```
/// use phrasefind::char_slice;
///
/// assert_eq!(char_slice("naïve café", 6, 4), Some("café"));
/// assert_eq!(char_slice("abc", 2, 5), None);
/// ```
pub fn char_slice(text: &str, offset: usize, length: usize) -> Option<&str> {
    let start = byte_index(text, offset)?;
    let len = byte_index(&text[start..], length)?;
    Some(&text[start..start + len])
}

/// Byte position of the `n`th character, or `text.len()` when `n` is the count.
fn byte_index(text: &str, n: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(n)
}
