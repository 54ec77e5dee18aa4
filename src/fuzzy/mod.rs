// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching primitive: edit distance.
//!
//! One plain Levenshtein for exact distances, and a bounded variant that gives
//! up early once a pair is known to be too far apart (the sliding-window case).

mod levenshtein;

pub use levenshtein::*;
