// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Checks the metric axioms and that the bounded variant agrees with the plain
//! distance. Every fuzzy score is derived from these numbers, so a wrong
//! distance means wrong matches.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phrasefind::{levenshtein, levenshtein_bounded};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    let d = levenshtein(&a, &b);

    // INVARIANT 1: symmetry
    assert_eq!(d, levenshtein(&b, &a), "asymmetric for {:?} / {:?}", a, b);

    // INVARIANT 2: zero iff equal
    assert_eq!(d == 0, a == b, "identity broken for {:?} / {:?}", a, b);

    // INVARIANT 3: length difference <= d <= longer length
    assert!(d >= a_len.abs_diff(b_len));
    assert!(d <= a_len.max(b_len));

    // INVARIANT 4: bounded agrees with plain whenever it answers
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let max = usize::from(input.max);
    let bounded = levenshtein_bounded(&a_chars, &b_chars, max);
    assert_eq!(bounded, (d <= max).then_some(d), "bounded mismatch, max {}", max);
});
