// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance over arbitrary symbol sequences.
//!
//! The classic prefix-table recurrence, keeping one row at a time:
//!
//! ```text
//! table[0][j] = j
//! table[i][0] = i
//! table[i][j] = min(table[i-1][j] + 1,
//!                   table[i][j-1] + 1,
//!                   table[i-1][j-1] + (a[i-1] != b[j-1]))
//! ```
//!
//! The row is indexed by the shorter sequence, so scratch space is
//! `O(min(len(a), len(b)))`. Distance is symmetric, so swapping the
//! operands never changes the answer.
//!
//! `levenshtein_bounded` adds two early exits for the fuzzy window scan,
//! where only distances up to some budget matter:
//! 1. `|len(a) - len(b)|` is a lower bound on edit distance
//! 2. the minimum of a row never decreases in later rows
//!
//! Neither exit ever rejects a pair whose distance is within the budget, and a
//! `Some(d)` result is always the exact distance.

/// Edit distance between two symbol sequences.
///
/// Minimum number of single-symbol insertions, deletions, or substitutions
/// turning `a` into `b`. Empty input yields the length of the other side.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    row[short.len()]
}

/// Edit distance between two strings, counted in characters (not bytes).
///
/// ```
/// assert_eq!(phrasefind::levenshtein("kitten", "sitting"), 3);
/// assert_eq!(phrasefind::levenshtein("café", "cafe"), 1);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

/// Edit distance, or `None` as soon as it provably exceeds `max`.
///
/// Returns `Some(d)` iff `edit_distance(a, b) == d` and `d <= max`.
pub fn levenshtein_bounded<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    // Early-exit: length difference is a lower bound on edit distance
    if long.len() - short.len() > max {
        return None;
    }
    if short.is_empty() {
        return Some(long.len());
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut min_row = row[0];

        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
            min_row = min_row.min(row[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    let distance = row[short.len()];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_bounded(&a, &b, max).is_some()
}
