// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the exact and fuzzy phrase scans.
//!
//! Arbitrary Unicode text is where char-vs-byte offset bugs hide, so every
//! reported span is sliced back out of the text and checked.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phrasefind::{exact_matches, find_offsets_json, fuzzy_matches, MatchRecord};

#[derive(Debug, Arbitrary)]
struct ScanInput {
    text: String,
    phrase: String,
    /// Threshold in hundredths, deliberately allowed past [0, 1]
    threshold: i8,
}

fuzz_target!(|input: ScanInput| {
    let text: String = input.text.chars().take(200).collect();
    let phrase: String = input.phrase.chars().take(12).collect();
    let threshold = f64::from(input.threshold) / 100.0;
    let phrase_len = phrase.chars().count();

    // INVARIANT 1: exact spans slice back to the phrase, offsets increase
    let exact = exact_matches(&text, &phrase);
    for record in &exact {
        assert_eq!(record.extract(&text), Some(phrase.as_str()));
    }
    assert!(exact.windows(2).all(|w| w[0].offset() < w[1].offset()));

    // INVARIANT 2: fuzzy spans are phrase-sized and scored within [0, 1]
    let fuzzy = fuzzy_matches(&text, &phrase, threshold);
    for record in &fuzzy {
        assert_eq!(record.length(), phrase_len);
        assert!(record.extract(&text).is_some());
        let score = record.score().unwrap_or(f64::NAN);
        assert!((0.0..=1.0).contains(&score));
    }

    // INVARIANT 3: full threshold is exact matching
    let full: Vec<usize> = fuzzy_matches(&text, &phrase, 1.0).iter().map(MatchRecord::offset).collect();
    let literal: Vec<usize> = exact.iter().map(MatchRecord::offset).collect();
    assert_eq!(full, literal);

    // INVARIANT 4: JSON is always an array
    let json = find_offsets_json(&text, &phrase, true, threshold).expect("encode");
    assert!(json.starts_with('['));
});
