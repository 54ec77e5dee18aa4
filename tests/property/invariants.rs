//! Properties every distance and every match list must satisfy.

use crate::common::literal_offsets;
use proptest::prelude::*;
use phrasefind::matcher::max_distance;
use phrasefind::{exact_matches, fuzzy_matches, levenshtein, MatchRecord};

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{0,10}").unwrap()
}

/// Texts and phrases over a tiny alphabet so phrases actually occur.
fn text_and_phrase() -> impl Strategy<Value = (String, String)> {
    (
        prop::string::string_regex("[ab]{0,40}").unwrap(),
        prop::string::string_regex("[ab]{1,5}").unwrap(),
    )
}

// ============================================================================
// EDIT DISTANCE
// ============================================================================

proptest! {
    #[test]
    fn prop_distance_identity(a in word()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn prop_distance_zero_iff_equal(a in word(), b in word()) {
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_distance_symmetric(a in word(), b in word()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_distance_triangle(a in word(), b in word(), c in word()) {
        prop_assert!(levenshtein(&a, &b) <= levenshtein(&a, &c) + levenshtein(&c, &b));
    }

    #[test]
    fn prop_distance_against_empty(s in "\\PC{0,20}") {
        let len = s.chars().count();
        prop_assert_eq!(levenshtein("", &s), len);
        prop_assert_eq!(levenshtein(&s, ""), len);
    }

    #[test]
    fn prop_distance_bounded_by_longer(a in word(), b in word()) {
        let longest = a.chars().count().max(b.chars().count());
        let shortest_gap = a.chars().count().abs_diff(b.chars().count());
        let d = levenshtein(&a, &b);
        prop_assert!(d <= longest);
        prop_assert!(d >= shortest_gap);
    }
}

// ============================================================================
// EXACT MATCHES
// ============================================================================

proptest! {
    #[test]
    fn prop_exact_finds_every_literal_offset((text, phrase) in text_and_phrase()) {
        let found: Vec<usize> = exact_matches(&text, &phrase).iter().map(MatchRecord::offset).collect();
        prop_assert_eq!(found, literal_offsets(&text, &phrase));
    }

    #[test]
    fn prop_exact_records_slice_to_phrase((text, phrase) in text_and_phrase()) {
        for record in exact_matches(&text, &phrase) {
            prop_assert_eq!(record.extract(&text), Some(phrase.as_str()));
            prop_assert_eq!(record.score(), None);
        }
    }
}

// ============================================================================
// FUZZY MATCHES
// ============================================================================

proptest! {
    #[test]
    fn prop_full_threshold_equals_exact((text, phrase) in text_and_phrase()) {
        let exact: Vec<usize> = exact_matches(&text, &phrase).iter().map(MatchRecord::offset).collect();
        let fuzzy: Vec<usize> = fuzzy_matches(&text, &phrase, 1.0).iter().map(MatchRecord::offset).collect();
        prop_assert_eq!(exact, fuzzy);
    }

    #[test]
    fn prop_nonpositive_threshold_takes_all_windows(
        (text, phrase) in text_and_phrase(),
        threshold in -1.0f64..=0.0
    ) {
        let n = text.chars().count();
        let m = phrase.chars().count();
        let expected = if n >= m { n - m + 1 } else { 0 };
        prop_assert_eq!(fuzzy_matches(&text, &phrase, threshold).len(), expected);
    }

    #[test]
    fn prop_fuzzy_records_well_formed(
        (text, phrase) in text_and_phrase(),
        threshold in 0.0f64..=1.0
    ) {
        let n = text.chars().count();
        let m = phrase.chars().count();
        let records = fuzzy_matches(&text, &phrase, threshold);

        for pair in records.windows(2) {
            prop_assert!(pair[0].offset() < pair[1].offset());
        }
        for record in &records {
            prop_assert_eq!(record.length(), m);
            prop_assert!(record.end() <= n);

            let score = record.score().unwrap_or(-1.0);
            prop_assert!((0.0..=1.0).contains(&score));

            let window = record.extract(&text).unwrap_or_default();
            let raw = (m - levenshtein(&phrase, window)) as f64 / m as f64;
            prop_assert!(raw >= threshold);
            prop_assert!((raw - score).abs() <= 0.0005 + f64::EPSILON);
        }
    }

    #[test]
    fn prop_higher_threshold_is_subset(
        (text, phrase) in text_and_phrase(),
        low in 0.0f64..=1.0,
        bump in 0.0f64..=0.5
    ) {
        let loose: Vec<usize> = fuzzy_matches(&text, &phrase, low).iter().map(MatchRecord::offset).collect();
        let strict = fuzzy_matches(&text, &phrase, low + bump);
        for record in strict {
            prop_assert!(loose.contains(&record.offset()));
        }
    }

    #[test]
    fn prop_calls_are_pure(
        (text, phrase) in text_and_phrase(),
        threshold in 0.0f64..=1.0
    ) {
        prop_assert_eq!(exact_matches(&text, &phrase), exact_matches(&text, &phrase));
        prop_assert_eq!(
            fuzzy_matches(&text, &phrase, threshold),
            fuzzy_matches(&text, &phrase, threshold)
        );
    }

    #[test]
    fn prop_budget_is_largest_passing_distance(length in 1usize..40, threshold in -0.5f64..1.5) {
        let score = |d: usize| (length - d) as f64 / length as f64;
        match max_distance(length, threshold) {
            Some(d) => {
                prop_assert!(score(d) >= threshold);
                prop_assert!(d == length || score(d + 1) < threshold);
            }
            None => prop_assert!(score(0) < threshold),
        }
    }
}
