// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! The pipeline only talks to [`FuzzyEngine`]. Swap the engine, mock it in
//! tests, retune it per deployment: the aggregator and booster don't care.
//! [`EditDistanceEngine`] is the built-in implementation.

mod engine;
mod levenshtein;

pub use engine::*;
pub use levenshtein::*;

use serde::{Deserialize, Serialize};

use crate::types::{ContentRecord, MatchResult};

/// A record field the engine can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Tags,
    Author,
    Summary,
    Content,
}

impl Field {
    /// Non-empty values of this field. Tags yield one value per tag.
    pub fn values(self, record: &ContentRecord) -> Vec<&str> {
        let values: Vec<&str> = match self {
            Field::Title => vec![record.title.as_str()],
            Field::Tags => record.tags.iter().map(String::as_str).collect(),
            Field::Author => record.author.as_deref().into_iter().collect(),
            Field::Summary => vec![record.summary.as_str()],
            Field::Content => record.content.as_deref().into_iter().collect(),
        };
        values.into_iter().filter(|v| !v.trim().is_empty()).collect()
    }
}

/// One searchable field and how much it counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldKey {
    pub name: Field,
    pub weight: f64,
}

impl FieldKey {
    pub const fn new(name: Field, weight: f64) -> Self {
        Self { name, weight }
    }
}

/// Tuning knobs handed to the engine on every call.
///
/// Defaults favor precision: title dominates, tags next, body content barely
/// registers so long texts can't flood the results with incidental hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyOptions {
    /// Maximum accepted score (errors per pattern character, plus proximity).
    pub threshold: f64,
    /// How far from the start of a field a match may drift before proximity
    /// costs as much as one full error. Ignored when `ignore_location` is set.
    pub distance: usize,
    pub ignore_location: bool,
    /// Patterns shorter than this never match. 1 keeps single-glyph CJK words.
    pub min_match_char_length: usize,
    pub keys: Vec<FieldKey>,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.28,
            distance: 120,
            ignore_location: true,
            min_match_char_length: 1,
            keys: vec![
                FieldKey::new(Field::Title, 0.62),
                FieldKey::new(Field::Tags, 0.25),
                FieldKey::new(Field::Author, 0.08),
                FieldKey::new(Field::Summary, 0.05),
                FieldKey::new(Field::Content, 0.01),
            ],
        }
    }
}

/// The fuzzy-match capability the pipeline consumes.
///
/// Contract: for one query string, return every matching record (no cap),
/// best first, each with a score where lower means more similar.
pub trait FuzzyEngine {
    fn search(
        &self,
        records: &[ContentRecord],
        query: &str,
        options: &FuzzyOptions,
    ) -> Vec<MatchResult>;
}
