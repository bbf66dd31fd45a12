// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presentation helpers for the HTML result list.
//!
//! Every piece of record text is provider data and gets escaped before it
//! touches markup, urls included. Labels and the count line come in two
//! locales; the site itself is Chinese, English is the library default.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::types::{ContentRecord, SearchOutcome, Section};

/// Tags shown per result card.
pub const MAX_CARD_TAGS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Escape `& < > " '` for safe inclusion in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Badge text for a record's section. Anything that isn't a book shows the
/// booklist label.
pub fn badge_label(section: Section, locale: Locale) -> &'static str {
    match (section, locale) {
        (Section::Books, Locale::En) => "Book",
        (Section::Books, Locale::Zh) => "书籍",
        (Section::Lists | Section::Other, Locale::En) => "List",
        (Section::Lists | Section::Other, Locale::Zh) => "书单",
    }
}

/// The "showing X of Y results" line. Empty for the no-query state.
pub fn summary(outcome: &SearchOutcome<'_>, locale: Locale) -> String {
    if outcome.is_empty_query() {
        return String::new();
    }
    let shown = outcome.items.len();
    let total = outcome.total;
    match locale {
        Locale::En => format!("showing {} of {} results", shown, total),
        Locale::Zh => format!("显示 {} / 共 {} 条结果", shown, total),
    }
}

pub fn no_results_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "No results found",
        Locale::Zh => "没有找到结果",
    }
}

/// The "author · date" line, or `None` when both are missing.
pub fn byline(record: &ContentRecord, locale: Locale) -> Option<String> {
    match (record.author(), record.date()) {
        (None, None) => None,
        (Some(author), None) => Some(author_label(author, locale)),
        (None, Some(date)) => Some(date.to_string()),
        (Some(author), Some(date)) => Some(format!("{} · {}", author_label(author, locale), date)),
    }
}

fn author_label(author: &str, locale: Locale) -> String {
    match locale {
        Locale::En => author.to_string(),
        Locale::Zh => format!("作者：{}", author),
    }
}

/// Markup for one result card.
pub fn render_card_html(record: &ContentRecord, locale: Locale) -> String {
    let mut html = String::new();
    let _ = writeln!(html, r#"<a class="result" href="{}">"#, escape_html(&record.url));
    let _ = writeln!(
        html,
        r#"  <div class="badge">{}</div>"#,
        badge_label(record.section, locale)
    );
    let _ = writeln!(html, r#"  <div class="title">{}</div>"#, escape_html(&record.title));
    let _ = writeln!(html, r#"  <div class="summary">{}</div>"#, escape_html(&record.summary));
    if let Some(line) = byline(record, locale) {
        let _ = writeln!(html, r#"  <div class="byline">{}</div>"#, escape_html(&line));
    }
    if !record.tags.is_empty() {
        html.push_str(r#"  <div class="tags">"#);
        for tag in record.tags.iter().take(MAX_CARD_TAGS) {
            let _ = write!(html, r#"<span class="tag">{}</span>"#, escape_html(tag));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</a>\n");
    html
}

/// Markup for a whole outcome: the summary line followed by the cards.
pub fn render_outcome_html(outcome: &SearchOutcome<'_>, locale: Locale) -> String {
    if outcome.is_empty_query() {
        return String::new();
    }

    let mut html = String::new();
    let _ = writeln!(
        html,
        r#"<div class="meta">{}</div>"#,
        escape_html(&summary(outcome, locale))
    );
    if outcome.items.is_empty() {
        let _ = writeln!(html, r#"<div class="empty">{}</div>"#, no_results_message(locale));
        return html;
    }
    for record in &outcome.items {
        html.push_str(&render_card_html(record, locale));
    }
    html
}
