// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search run.
//!
//! Records come from the index provider and are never mutated here. Everything
//! else in this module is request-scoped: created for one query, thrown away
//! when the ranked list has been handed to the presentation layer.
//!
//! # Invariants
//!
//! - **ContentRecord**: `url` identifies the record. Records with an empty url
//!   are kept in the index but can never reach the ranked output.
//!
//! - **MatchResult**: `doc_id < index.len()`. Results always point into the
//!   index they were produced from.
//!
//! - **SearchOutcome**: `items.len() == min(display_limit, total)` and no two
//!   items share a url.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Which shelf a record sits on.
///
/// The index only ever emits `"books"` and `"lists"`, but the value is
/// provider-owned data. Anything else lands on `Other` instead of failing the
/// whole index load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Books,
    Lists,
    #[default]
    #[serde(other)]
    Other,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Books => "books",
            Section::Lists => "lists",
            Section::Other => "other",
        }
    }
}

/// One indexed, searchable unit: a book or a booklist entry.
///
/// Every field is optional in the payload. Missing, `null` or wrongly typed
/// values deserialize to empty/`None`, so one sloppy record never fails the
/// whole index. A record left without a url stays in the index but is dropped
/// at deduplication.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    /// Opaque display string, never parsed.
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    /// Non-string elements are skipped.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub section: Section,
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_opt_string(deserializer).map(Option::unwrap_or_default)
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_section<'de, D>(deserializer: D) -> Result<Section, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => match s.as_str() {
            "books" => Section::Books,
            "lists" => Section::Lists,
            _ => Section::Other,
        },
        _ => Section::Other,
    })
}

impl ContentRecord {
    /// The navigation key, or `None` when the record cannot be linked to.
    pub fn link(&self) -> Option<&str> {
        let url = self.url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }

    /// Author with empty strings treated as absent.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    /// Date with empty strings treated as absent.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }
}

/// One hit from the fuzzy-match engine.
///
/// `doc_id` is the record's position in the index. `score` follows the engine
/// convention: lower is more similar. `None` means the engine didn't report a
/// score, which the booster treats as the worst legal value (1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub doc_id: usize,
    pub score: Option<f64>,
}

impl MatchResult {
    pub fn new(doc_id: usize, score: f64) -> Self {
        Self {
            doc_id,
            score: Some(score),
        }
    }

    /// Engine score with the missing-score default applied.
    pub fn engine_score(&self) -> f64 {
        self.score.unwrap_or(1.0)
    }
}

/// What the pipeline hands to the presentation layer for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<'a> {
    /// Ranked records, capped at the display limit.
    pub items: Vec<&'a ContentRecord>,
    /// Number of deduplicated matches before the display cap.
    pub total: usize,
    /// The canonical query the run used. Empty for the no-query state.
    pub query: String,
}

impl SearchOutcome<'_> {
    /// The "no query, no results, no summary" state.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            query: String::new(),
        }
    }

    pub fn is_empty_query(&self) -> bool {
        self.query.is_empty()
    }
}
