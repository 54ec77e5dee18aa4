// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact phrase scan.
//!
//! Repeated substring search that resumes one character after each hit's
//! start, not after its end, so overlapping occurrences all surface:
//! `"aa"` in `"aaa"` gives offsets 0 and 1.
//!
//! The search itself runs on bytes (`str::find`), and the running character
//! offset is advanced by counting only the characters between consecutive
//! hits, so the whole scan touches each byte of the gaps once.

use crate::contracts::check_exact_records;
use crate::types::MatchRecord;
use tracing::debug;

/// Every literal occurrence of `phrase` in `text`, in increasing offset order.
///
/// An empty phrase matches nothing: there is no useful span to report, and
/// "matches everywhere" would just be noise for a highlighter.
///
/// ```
/// use phrasefind::{exact_matches, MatchRecord};
///
/// let hits = exact_matches("aaa", "aa");
/// assert_eq!(
///     hits,
///     vec![
///         MatchRecord::Exact { offset: 0, length: 2 },
///         MatchRecord::Exact { offset: 1, length: 2 },
///     ]
/// );
/// ```
pub fn exact_matches(text: &str, phrase: &str) -> Vec<MatchRecord> {
    if phrase.is_empty() {
        return Vec::new();
    }

    let length = phrase.chars().count();
    let mut results = Vec::new();

    let mut search_from = 0;
    let mut counted_to = 0;
    let mut char_offset = 0;

    while let Some(found) = text[search_from..].find(phrase) {
        let at = search_from + found;
        char_offset += text[counted_to..at].chars().count();
        counted_to = at;

        results.push(MatchRecord::Exact {
            offset: char_offset,
            length,
        });

        // A hit at `at` means a whole character starts there
        let step = text[at..].chars().next().map_or(1, char::len_utf8);
        search_from = at + step;
    }

    debug!(
        phrase_len = length,
        matches = results.len(),
        "exact scan complete"
    );

    if cfg!(debug_assertions) {
        let text_chars: Vec<char> = text.chars().collect();
        let phrase_chars: Vec<char> = phrase.chars().collect();
        check_exact_records(&text_chars, &phrase_chars, &results);
    }

    results
}
