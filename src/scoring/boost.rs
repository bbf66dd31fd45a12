// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance boosting: the deterministic second pass over engine scores.
//!
//! `final = engine_score + Σ deltas`, where each delta is ≤ 0 and comes from
//! an independent signal evaluated on the lowercased query:
//!
//! | Signal          | Condition                          | Default |
//! |-----------------|------------------------------------|---------|
//! | Title exact     | title == query                     | −2.5    |
//! | Title prefix    | title starts with query            | −1.0    |
//! | Title substring | title contains query               | −0.6    |
//! | Tags exact      | joined tags == query               | −0.8    |
//! | Tags substring  | joined tags contains query         | −0.35   |
//! | Author          | author contains query              | −0.25   |
//! | Booklist        | section is `lists`                 | −0.25   |
//!
//! Within a field only the strongest tier fires (exact > prefix > substring).
//! Across fields everything sums.
//!
//! # Key Invariant: Tier Dominance
//!
//! With everything else equal, exact ≤ prefix ≤ substring for the final
//! score. That holds as long as `title_exact ≤ title_prefix ≤ title_substring`
//! (and likewise for tags), which the defaults satisfy.

use serde::{Deserialize, Serialize};

use super::ranking::{sort_scored, ScoredResult};
use crate::types::{ContentRecord, MatchResult, Section};
use crate::utils::joined_tags;

/// Signed boost deltas. More negative means more relevant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostWeights {
    pub title_exact: f64,
    pub title_prefix: f64,
    pub title_substring: f64,
    pub tags_exact: f64,
    pub tags_substring: f64,
    pub author: f64,
    pub lists_section: f64,
}

impl Default for BoostWeights {
    fn default() -> Self {
        Self {
            title_exact: -2.5,
            title_prefix: -1.0,
            title_substring: -0.6,
            tags_exact: -0.8,
            tags_substring: -0.35,
            author: -0.25,
            lists_section: -0.25,
        }
    }
}

/// Which signal fired for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoostSignal {
    TitleExact,
    TitlePrefix,
    TitleSubstring,
    TagsExact,
    TagsSubstring,
    Author,
    ListsSection,
}

impl BoostSignal {
    pub fn delta(self, weights: &BoostWeights) -> f64 {
        match self {
            BoostSignal::TitleExact => weights.title_exact,
            BoostSignal::TitlePrefix => weights.title_prefix,
            BoostSignal::TitleSubstring => weights.title_substring,
            BoostSignal::TagsExact => weights.tags_exact,
            BoostSignal::TagsSubstring => weights.tags_substring,
            BoostSignal::Author => weights.author,
            BoostSignal::ListsSection => weights.lists_section,
        }
    }
}

/// Every signal that applies to `record` for a lowercased `query`.
///
/// An empty query matches no text signal; only the section bonus can fire.
/// Missing author/tags simply produce no signal.
pub fn boost_signals(record: &ContentRecord, query: &str) -> Vec<BoostSignal> {
    let mut signals = Vec::new();

    if !query.is_empty() {
        let title = record.title.to_lowercase();
        if title == query {
            signals.push(BoostSignal::TitleExact);
        } else if title.starts_with(query) {
            signals.push(BoostSignal::TitlePrefix);
        } else if title.contains(query) {
            signals.push(BoostSignal::TitleSubstring);
        }

        if !record.tags.is_empty() {
            let tags = joined_tags(&record.tags);
            if tags == query {
                signals.push(BoostSignal::TagsExact);
            } else if tags.contains(query) {
                signals.push(BoostSignal::TagsSubstring);
            }
        }

        if let Some(author) = record.author() {
            if author.to_lowercase().contains(query) {
                signals.push(BoostSignal::Author);
            }
        }
    }

    if record.section == Section::Lists {
        signals.push(BoostSignal::ListsSection);
    }

    signals
}

/// Sum of the deltas for every signal that applies.
pub fn boost_delta(record: &ContentRecord, query: &str, weights: &BoostWeights) -> f64 {
    boost_signals(record, query)
        .into_iter()
        .map(|s| s.delta(weights))
        .sum()
}

/// Compute final scores and sort ascending. Scores are kept for inspection.
///
/// Results whose doc_id falls outside `records` are skipped.
pub fn rank(
    results: &[MatchResult],
    records: &[ContentRecord],
    query: &str,
    weights: &BoostWeights,
) -> Vec<ScoredResult> {
    let query = query.trim().to_lowercase();

    let mut scored: Vec<ScoredResult> = results
        .iter()
        .filter_map(|r| {
            let record = records.get(r.doc_id)?;
            Some(ScoredResult {
                doc_id: r.doc_id,
                score: r.engine_score() + boost_delta(record, &query, weights),
            })
        })
        .collect();

    sort_scored(&mut scored);
    scored
}

/// The terminal ranking step: boosted, sorted records with scores discarded.
pub fn boost<'a>(
    results: &[MatchResult],
    records: &'a [ContentRecord],
    query: &str,
    weights: &BoostWeights,
) -> Vec<&'a ContentRecord> {
    rank(results, records, query, weights)
        .into_iter()
        .map(|s| &records[s.doc_id])
        .collect()
}
