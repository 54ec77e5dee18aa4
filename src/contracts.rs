// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on matcher output.
//!
//! Debug-mode assertions that every batch of match records satisfies the
//! guarantees callers rely on. Zero-cost in release builds (`debug_assert!`),
//! early failure in tests and development.
//!
//! | Contract Function          | Guarantee                                          |
//! |----------------------------|----------------------------------------------------|
//! | `check_records_in_bounds`  | `0 < length` and `offset + length <= len(text)`    |
//! | `check_offsets_increasing` | strictly increasing offsets                        |
//! | `check_exact_records`      | slice equals the phrase, no score                  |
//! | `check_fuzzy_records`      | score recomputes from distance and passes threshold |
//! | `check_bounded_distance`   | bounded result agrees with the full distance       |
//!
//! The fuzzy check recomputes every distance, so debug builds pay the scan twice.

use crate::fuzzy::edit_distance;
use crate::types::{round_score, MatchRecord};

// ============================================================================
// SHAPE CONTRACTS
// ============================================================================

/// Every record spans a non-empty, in-bounds range of `text_len` symbols.
#[inline]
pub fn check_records_in_bounds(records: &[MatchRecord], text_len: usize) {
    for (i, record) in records.iter().enumerate() {
        debug_assert!(
            record.length() > 0,
            "Contract violation: records[{}] has zero length",
            i
        );
        debug_assert!(
            record.end() <= text_len,
            "Contract violation: records[{}] ends at {} past text length {}",
            i,
            record.end(),
            text_len
        );
    }
}

/// Offsets are strictly increasing (ordered, no duplicates).
#[inline]
pub fn check_offsets_increasing(records: &[MatchRecord]) {
    for pair in records.windows(2) {
        debug_assert!(
            pair[0].offset() < pair[1].offset(),
            "Contract violation: offset {} is not before offset {}",
            pair[0].offset(),
            pair[1].offset()
        );
    }
}

// ============================================================================
// STRATEGY CONTRACTS
// ============================================================================

/// Exact records carry no score and cover exactly the phrase.
#[inline]
pub fn check_exact_records(text: &[char], phrase: &[char], records: &[MatchRecord]) {
    check_records_in_bounds(records, text.len());
    check_offsets_increasing(records);

    for record in records {
        debug_assert!(
            !record.is_fuzzy(),
            "Contract violation: exact record at {} carries a score",
            record.offset()
        );
        debug_assert!(
            text.get(record.offset()..record.end()) == Some(phrase),
            "Contract violation: exact record at {} does not equal the phrase",
            record.offset()
        );
    }
}

/// Fuzzy records report the rounded score of an accepted window.
#[inline]
pub fn check_fuzzy_records(
    text: &[char],
    phrase: &[char],
    threshold: f64,
    records: &[MatchRecord],
) {
    check_records_in_bounds(records, text.len());
    check_offsets_increasing(records);

    if !cfg!(debug_assertions) {
        return;
    }

    for record in records {
        let Some(score) = record.score() else {
            panic!(
                "Contract violation: fuzzy record at {} has no score",
                record.offset()
            );
        };
        debug_assert_eq!(record.length(), phrase.len());

        let window = &text[record.offset()..record.end()];
        let distance = edit_distance(phrase, window);
        let raw = (phrase.len() - distance) as f64 / phrase.len() as f64;

        debug_assert!(
            raw >= threshold,
            "Contract violation: window at {} scored {} below threshold {}",
            record.offset(),
            raw,
            threshold
        );
        debug_assert_eq!(
            score,
            round_score(raw),
            "Contract violation: reported score {} differs from recomputed {}",
            score,
            round_score(raw)
        );
    }
}

/// A bounded distance agrees with the unbounded one whenever it answers.
///
/// `None` is only allowed when the true distance exceeds `max`.
#[inline]
pub fn check_bounded_distance<T: PartialEq>(a: &[T], b: &[T], max: usize, result: Option<usize>) {
    if !cfg!(debug_assertions) {
        return;
    }

    let actual = edit_distance(a, b);
    match result {
        Some(d) => debug_assert_eq!(
            d, actual,
            "Contract violation: bounded distance {} != actual {}",
            d, actual
        ),
        None => debug_assert!(
            actual > max,
            "Contract violation: bounded distance rejected pair at {} <= max {}",
            actual,
            max
        ),
    }
}
