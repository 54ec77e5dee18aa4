// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for phrasefind matches.
//!
//! Each match prints as one line with its span, optional score, and the
//! matched text highlighted inside a little surrounding context. OneDark
//! palette for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and falls back to plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `PHRASEFIND_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use phrasefind::{char_slice, MatchMode, MatchRecord};
use std::sync::OnceLock;

// Minimum box width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Characters of surrounding text shown on each side of a match.
pub const CONTEXT_CHARS: usize = 12;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("PHRASEFIND_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7+ (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Newlines and tabs in context would break the one-line layout
fn flatten(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str, width: usize) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = width.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    )
}

/// Content line: │ content          │
pub fn row(content: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(content));
    let border = themed(GRAY, &[], "│");
    format!("{}{}{}{}", border, content, " ".repeat(pad), border)
}

/// Section footer: └──────────────────┘
pub fn section_bot(width: usize) -> String {
    themed(GRAY, &[], &format!("└{}┘", "─".repeat(width)))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded fuzzy score (green=near-exact, yellow=close, red=loose)
pub fn score_value(score: f64) -> String {
    let formatted = format!("{:.3}", score);
    if !use_colors() {
        return formatted;
    }
    let color = if score >= 1.0 {
        BRIGHT_GREEN()
    } else if score >= 0.9 {
        GREEN()
    } else if score >= 0.75 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{}{}", color, formatted, RESET)
}

/// Matched text with up to `context` characters either side, match highlighted.
///
/// `total` is the character count of `text`. Returns `None` if the record
/// does not fit `text`.
pub fn highlight(
    text: &str,
    total: usize,
    record: &MatchRecord,
    context: usize,
) -> Option<String> {
    let matched = record.extract(text)?;
    let before_start = record.offset().saturating_sub(context);
    let before = char_slice(text, before_start, record.offset() - before_start)?;
    let after_len = context.min(total.checked_sub(record.end())?);
    let after = char_slice(text, record.end(), after_len)?;

    let lead = if before_start > 0 { "…" } else { "" };
    let tail = if record.end() + after_len < total { "…" } else { "" };

    Some(format!(
        "{}{}{}",
        themed(GRAY, &[], &format!("{}{}", lead, flatten(before))),
        themed(BRIGHT_GREEN, &[BOLD, UNDERLINE], &flatten(matched)),
        themed(GRAY, &[], &format!("{}{}", flatten(after), tail)),
    ))
}

/// One display line: `Match at 4 (len 17) 0.882: …text[match]text…`
pub fn match_line(text: &str, total: usize, record: &MatchRecord) -> String {
    let span = format!("Match at {} (len {})", record.offset(), record.length());
    let score = record
        .score()
        .map(|s| format!(" {}", score_value(s)))
        .unwrap_or_default();
    let body = highlight(text, total, record, CONTEXT_CHARS).unwrap_or_default();
    format!(" {}{}: {}", themed(CYAN, &[], &span), score, body)
}

/// Every match inside a box, with a header naming the query.
///
/// The box grows past [`BOX_WIDTH`] when the header or a line needs it.
pub fn render_matches(
    text: &str,
    phrase: &str,
    mode: MatchMode,
    records: &[MatchRecord],
) -> String {
    let label = match mode {
        MatchMode::Exact => format!("EXACT \"{}\"", phrase),
        MatchMode::Fuzzy { threshold } => format!("FUZZY \"{}\" >= {}", phrase, threshold),
    };
    let total = text.chars().count();
    let lines: Vec<String> = if records.is_empty() {
        vec![themed(GRAY, &[], " no matches")]
    } else {
        records
            .iter()
            .map(|record| match_line(text, total, record))
            .collect()
    };

    let width = lines
        .iter()
        .map(|line| visible_len(line))
        .chain([BOX_WIDTH, visible_len(&label) + 3])
        .max()
        .unwrap_or(BOX_WIDTH);

    let mut out = vec![section_top(&label, width)];
    out.extend(lines.iter().map(|line| row(line, width)));
    out.push(section_bot(width));
    out.join("\n")
}

pub fn print_matches(text: &str, phrase: &str, mode: MatchMode, records: &[MatchRecord]) {
    println!("{}", render_matches(text, phrase, mode, records));
}
