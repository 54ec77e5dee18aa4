//! Differential testing: compare optimized implementations against oracles.
//!
//! The bounded distance and the budgeted, possibly parallel window scan are
//! both shortcuts. If they disagree with the full-table oracle, the oracle is
//! right.

use super::oracles::{oracle_fuzzy_windows, oracle_levenshtein};
use proptest::prelude::*;
use phrasefind::{
    fuzzy_matches, fuzzy_matches_sequential, levenshtein, levenshtein_bounded, round_score,
};

// =============================================================================
// LEVENSHTEIN: Rust implementation vs Oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Rolling-row distance matches the full table.
    #[test]
    fn diff_levenshtein(a in "[a-d]{0,15}", b in "[a-d]{0,15}") {
        prop_assert_eq!(levenshtein(&a, &b), oracle_levenshtein(&a, &b));
    }

    /// Rolling-row distance matches strsim's implementation.
    #[test]
    fn diff_levenshtein_strsim(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Bounded distance answers iff the oracle distance fits the budget.
    #[test]
    fn diff_levenshtein_bounded(
        a in "[a-z]{0,15}",
        b in "[a-z]{0,15}",
        max_dist in 0usize..8
    ) {
        let oracle_dist = oracle_levenshtein(&a, &b);
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        let bounded = levenshtein_bounded(&a_chars, &b_chars, max_dist);

        let expected = (oracle_dist <= max_dist).then_some(oracle_dist);
        prop_assert_eq!(
            bounded, expected,
            "levenshtein_bounded({:?}, {:?}, {}) = {:?} but oracle distance = {}",
            a, b, max_dist, bounded, oracle_dist
        );
    }

    /// Unicode strings are compared per character.
    #[test]
    fn diff_levenshtein_unicode(
        a in prop::sample::select(vec![
            "cafe", "caf\u{00e9}", "na\u{00ef}ve", "r\u{00e9}sum\u{00e9}",
            "\u{00fc}ber", "t\u{014d}ky\u{014d}", "hello", "world"
        ]),
        b in prop::sample::select(vec![
            "cafe", "caf\u{00e9}", "na\u{00ef}ve", "r\u{00e9}sum\u{00e9}",
            "\u{00fc}ber", "t\u{014d}ky\u{014d}", "hello", "world"
        ])
    ) {
        prop_assert_eq!(levenshtein(a, b), oracle_levenshtein(a, b));
    }
}

// =============================================================================
// FUZZY SCAN: budgeted scan vs full scoring of every window
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Distance budget never changes which windows pass or what they score.
    #[test]
    fn diff_fuzzy_scan(
        text in "[abc ]{0,40}",
        phrase in "[abc]{1,6}",
        threshold in -0.2f64..1.2
    ) {
        let expected: Vec<(usize, f64)> = oracle_fuzzy_windows(&text, &phrase, threshold)
            .into_iter()
            .map(|(offset, score)| (offset, round_score(score)))
            .collect();
        let actual: Vec<(usize, f64)> = fuzzy_matches_sequential(&text, &phrase, threshold)
            .iter()
            .map(|m| (m.offset(), m.score().unwrap_or(f64::NAN)))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Thresholds landing exactly on a score boundary behave like the oracle.
    #[test]
    fn diff_fuzzy_scan_boundary_thresholds(
        text in "[ab]{0,30}",
        phrase in "[ab]{1,7}",
        distance in 0usize..8
    ) {
        let length = phrase.chars().count();
        prop_assume!(distance <= length);
        let threshold = (length - distance) as f64 / length as f64;

        let expected: Vec<usize> = oracle_fuzzy_windows(&text, &phrase, threshold)
            .into_iter()
            .map(|(offset, _)| offset)
            .collect();
        let actual: Vec<usize> = fuzzy_matches(&text, &phrase, threshold)
            .iter()
            .map(|m| m.offset())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Parallel and sequential scans produce identical output.
    #[test]
    fn diff_parallel_sequential(
        text in "[ab ]{200,600}",
        phrase in "[ab]{2,8}",
        threshold in 0.0f64..=1.0
    ) {
        prop_assert_eq!(
            fuzzy_matches(&text, &phrase, threshold),
            fuzzy_matches_sequential(&text, &phrase, threshold)
        );
    }
}
