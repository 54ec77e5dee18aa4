//! Shared test utilities and fixtures.

#![allow(dead_code)]

use phrasefind::MatchRecord;

/// Demo sentence: one clean and one OCR-mangled copy of the phrase.
pub const FOX_TEXT: &str =
    "The quick brown fox jumps over the lazy dog. The quack brown fix is swift.";

/// Phrase that never occurs literally in [`FOX_TEXT`].
pub const FOX_PHRASE: &str = "quick brown foxes";

/// Romanized dish name, the kind of token OCR mangles.
pub const DISH_PHRASE: &str = "egg-kim-bck-um-bab";

/// Offsets of a record list, for compact assertions.
pub fn offsets(records: &[MatchRecord]) -> Vec<usize> {
    records.iter().map(MatchRecord::offset).collect()
}

/// Character length of a string.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Replace the character at `index` (in chars) with `with`.
pub fn substitute(s: &str, index: usize, with: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if i == index { with } else { c })
        .collect()
}

/// Naive "every offset where the phrase literally starts" reference.
pub fn literal_offsets(text: &str, phrase: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let phrase: Vec<char> = phrase.chars().collect();
    if phrase.is_empty() || text.len() < phrase.len() {
        return Vec::new();
    }
    text.windows(phrase.len())
        .enumerate()
        .filter(|(_, w)| *w == phrase.as_slice())
        .map(|(i, _)| i)
        .collect()
}
