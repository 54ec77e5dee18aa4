// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy phrase scan: a dense sliding window scored by edit distance.
//!
//! Every window of `L = len(phrase)` characters is a candidate:
//!
//! ```text
//! text:    T h e _ q u a c k _ b r o w n ...
//! window 0 [-----------L-----------]
//! window 1   [-----------L-----------]
//! window 2     [-----------L-----------]
//! ```
//!
//! `score = (L - distance(phrase, window)) / L`. Windows at or above the
//! threshold are reported, each independently. Neighbouring windows around a
//! real hit usually all pass, so expect clusters (see [`best_matches`]).
//!
//! # Distance budget
//!
//! Score only falls as distance rises, so a threshold fixes the largest
//! acceptable distance. [`max_distance`] finds it by evaluating the exact same
//! score expression the acceptance test uses, which keeps boundary cases
//! identical to scoring every window in full. Each window then runs the
//! bounded Levenshtein and gives up as soon as the budget is blown.
//!
//! # Parallelism
//!
//! Windows are independent. With the `parallel` feature the scan fans out over
//! rayon and collects in window order, so output is identical to
//! [`fuzzy_matches_sequential`].

use crate::contracts::{check_bounded_distance, check_fuzzy_records};
use crate::fuzzy::levenshtein_bounded;
use crate::types::{round_score, MatchRecord};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Threshold used when a caller asks for fuzzy matching without one.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Texts shorter than this many windows are scanned on the current thread.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_WINDOWS: usize = 256;

/// Unrounded similarity of a window `distance` edits away from a phrase of `length`.
#[inline]
pub fn window_score(length: usize, distance: usize) -> f64 {
    (length - distance) as f64 / length as f64
}

/// Largest distance whose score still reaches `threshold`.
///
/// `None` means no window can pass, not even an exact copy of the phrase
/// (threshold above 1, or NaN). A threshold at or below 0 admits every
/// distance up to `length`.
pub fn max_distance(length: usize, threshold: f64) -> Option<usize> {
    if length == 0 {
        return None;
    }
    (0..=length)
        .take_while(|&d| window_score(length, d) >= threshold)
        .last()
}

/// Every window of `text` scoring at least `threshold` against `phrase`.
///
/// Returns nothing for an empty phrase or a text shorter than the phrase.
/// Thresholds outside `[0, 1]` are not rejected: above 1 yields nothing, at
/// or below 0 yields every window.
///
/// ```
/// use phrasefind::fuzzy_matches;
///
/// let hits = fuzzy_matches("the quack brown fix", "quick", 0.8);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].offset(), 4);
/// assert_eq!(hits[0].score(), Some(0.8));
/// ```
pub fn fuzzy_matches(text: &str, phrase: &str, threshold: f64) -> Vec<MatchRecord> {
    let text: Vec<char> = text.chars().collect();
    let phrase: Vec<char> = phrase.chars().collect();
    scan(&text, &phrase, threshold, Scan::pick(text.len(), phrase.len()))
}

/// Single-threaded form of [`fuzzy_matches`]. Same output, always.
pub fn fuzzy_matches_sequential(text: &str, phrase: &str, threshold: f64) -> Vec<MatchRecord> {
    let text: Vec<char> = text.chars().collect();
    let phrase: Vec<char> = phrase.chars().collect();
    scan(&text, &phrase, threshold, Scan::Sequential)
}

#[derive(Clone, Copy)]
enum Scan {
    Sequential,
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Scan {
    #[cfg(feature = "parallel")]
    fn pick(text_len: usize, phrase_len: usize) -> Self {
        if text_len.saturating_sub(phrase_len) + 1 >= PARALLEL_MIN_WINDOWS {
            Scan::Parallel
        } else {
            Scan::Sequential
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn pick(_text_len: usize, _phrase_len: usize) -> Self {
        Scan::Sequential
    }
}

fn scan(text: &[char], phrase: &[char], threshold: f64, mode: Scan) -> Vec<MatchRecord> {
    let length = phrase.len();
    if length == 0 || text.len() < length {
        return Vec::new();
    }

    let Some(budget) = max_distance(length, threshold) else {
        debug!(threshold, "threshold unreachable, skipping fuzzy scan");
        return Vec::new();
    };

    let score_window = |(offset, window): (usize, &[char])| {
        let result = levenshtein_bounded(phrase, window, budget);
        check_bounded_distance(phrase, window, budget, result);

        let distance = result?;
        let score = window_score(length, distance);
        if score < threshold {
            return None;
        }
        trace!(offset, distance, score, "window accepted");
        Some(MatchRecord::Fuzzy {
            offset,
            length,
            score: round_score(score),
        })
    };

    let results: Vec<MatchRecord> = match mode {
        Scan::Sequential => text
            .windows(length)
            .enumerate()
            .filter_map(score_window)
            .collect(),
        #[cfg(feature = "parallel")]
        Scan::Parallel => text
            .par_windows(length)
            .enumerate()
            .filter_map(score_window)
            .collect(),
    };

    debug!(
        phrase_len = length,
        windows = text.len() - length + 1,
        budget,
        matches = results.len(),
        "fuzzy scan complete"
    );

    check_fuzzy_records(text, phrase, threshold, &results);
    results
}

/// Collapse each cluster of overlapping matches to its best member.
///
/// A cluster is a maximal run of records where each overlaps the previous
/// one. The highest score wins; ties go to the earliest offset. Exact records
/// count as score 1.0. Input must be in increasing offset order, as produced
/// by the scans; output keeps that order.
pub fn best_matches(records: &[MatchRecord]) -> Vec<MatchRecord> {
    let mut best: Vec<MatchRecord> = Vec::new();
    let mut cluster: Option<(MatchRecord, MatchRecord)> = None; // (last seen, best so far)

    for &record in records {
        cluster = match cluster {
            Some((last, top)) if last.overlaps(&record) => {
                let top = if record.score().unwrap_or(1.0) > top.score().unwrap_or(1.0) {
                    record
                } else {
                    top
                };
                Some((record, top))
            }
            Some((_, top)) => {
                best.push(top);
                Some((record, record))
            }
            None => Some((record, record)),
        };
    }

    if let Some((_, top)) = cluster {
        best.push(top);
    }
    best
}
