// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the shelfsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `SHELFSEARCH_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Respects `NO_COLOR` and plain output for pipelines.

use std::sync::OnceLock;

use shelfsearch::render::{badge_label, byline, no_results_message, summary, MAX_CARD_TAGS};
use shelfsearch::{Locale, SearchOutcome, Section};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SHELFSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
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
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
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

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

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

/// Cut `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded section badge
pub fn section_badge(section: Section, locale: Locale) -> String {
    let label = format!("[{}]", badge_label(section, locale));
    match section {
        Section::Books => themed(BLUE, &[], &label),
        Section::Lists => themed(MAGENTA, &[], &label),
        Section::Other => themed(GRAY, &[], &label),
    }
}

/// Print a ranked outcome as numbered result cards.
pub fn print_outcome(outcome: &SearchOutcome<'_>, locale: Locale) {
    if outcome.is_empty_query() {
        return;
    }

    let header = themed(CYAN, &[BOLD], &summary(outcome, locale));
    println!("{}", header);
    println!("{}", themed(GRAY, &[], &"─".repeat(visible_len(&header))));
    if outcome.items.is_empty() {
        println!("{}", themed(GRAY, &[], no_results_message(locale)));
        return;
    }

    let width = outcome.items.len().to_string().len();
    for (rank, record) in outcome.items.iter().enumerate() {
        println!();
        println!(
            "{:>width$}. {} {}",
            rank + 1,
            section_badge(record.section, locale),
            themed(GREEN, &[BOLD], &record.title),
            width = width
        );
        let indent = " ".repeat(width + 2);
        if !record.summary.is_empty() {
            println!("{}{}", indent, truncate_chars(&record.summary, 120));
        }
        if let Some(line) = byline(record, locale) {
            println!("{}{}", indent, themed(GRAY, &[], &line));
        }
        if !record.tags.is_empty() {
            let tags: Vec<String> = record
                .tags
                .iter()
                .take(MAX_CARD_TAGS)
                .map(|t| themed(YELLOW, &[], &format!("#{}", t)))
                .collect();
            println!("{}{}", indent, tags.join(" "));
        }
        println!("{}{}", indent, themed(GRAY, &[DIM], &record.url));
    }
}

/// Print an expanded query set, canonical query first.
pub fn print_expansion(queries: &[String]) {
    for (i, query) in queries.iter().enumerate() {
        if i == 0 {
            println!("{}", themed(GREEN, &[BOLD], query));
        } else {
            println!("  {}", query);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
