// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built-in engine: weighted approximate matching over record fields.
//!
//! Each field value gets a score in `[0, threshold]`: edits per pattern
//! character, plus a proximity term when location matters. A record's score
//! multiplies `score^(weight × norm)` over every matched value, so:
//!
//! - an exact hit (score 0) in a heavy field drives the product toward 0
//! - matching more values only ever improves (lowers) the score
//! - short fields beat long ones through the length norm `1/√tokens`
//!
//! Records with no matched value are not returned at all.

use std::cmp::Ordering;

use super::{substring_within, FieldKey, FuzzyEngine, FuzzyOptions};
use crate::types::{ContentRecord, MatchResult};
use crate::utils::token_count;

/// Stand-in for an exact-match score so it still responds to the exponent.
const EXACT_SCORE: f64 = f64::EPSILON;

/// Default [`FuzzyEngine`]: bounded approximate substring search per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceEngine;

impl EditDistanceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score one field value against a lowercased pattern, or `None` on miss.
    pub fn score_value(pattern: &str, value: &str, options: &FuzzyOptions) -> Option<f64> {
        let pattern_len = pattern.chars().count();
        if pattern_len == 0 || pattern_len < options.min_match_char_length {
            return None;
        }

        let threshold = options.threshold.max(0.0);
        let max_edits = (threshold * pattern_len as f64).floor() as usize;
        let text = value.to_lowercase();
        let hit = substring_within(pattern, &text, max_edits)?;

        let accuracy = hit.distance as f64 / pattern_len as f64;
        let score = if options.ignore_location {
            accuracy
        } else if options.distance == 0 {
            if hit.start == 0 {
                accuracy
            } else {
                1.0
            }
        } else {
            accuracy + hit.start as f64 / options.distance as f64
        };

        (score <= threshold).then_some(score)
    }

    /// Combined score for one record, or `None` when no value matched.
    fn score_record(
        pattern: &str,
        record: &ContentRecord,
        keys: &[(FieldKey, f64)],
        options: &FuzzyOptions,
    ) -> Option<f64> {
        let mut total = 1.0;
        let mut matched = false;

        for (key, weight) in keys {
            for value in key.name.values(record) {
                if let Some(score) = Self::score_value(pattern, value, options) {
                    let base = if score == 0.0 { EXACT_SCORE } else { score };
                    total *= base.powf(weight * field_norm(value));
                    matched = true;
                }
            }
        }

        matched.then_some(total)
    }
}

impl FuzzyEngine for EditDistanceEngine {
    fn search(
        &self,
        records: &[ContentRecord],
        query: &str,
        options: &FuzzyOptions,
    ) -> Vec<MatchResult> {
        let pattern = query.to_lowercase();
        if pattern.trim().is_empty() {
            return Vec::new();
        }

        let keys = normalized_weights(&options.keys);

        let mut results: Vec<MatchResult> = records
            .iter()
            .enumerate()
            .filter_map(|(doc_id, record)| {
                Self::score_record(&pattern, record, &keys, options)
                    .map(|score| MatchResult::new(doc_id, score))
            })
            .collect();

        results.sort_by(compare_engine_results);

        tracing::trace!(query, hits = results.len(), "fuzzy search");
        results
    }
}

/// Key weights scaled to sum to 1. Non-positive totals fall back to 1 each.
fn normalized_weights(keys: &[FieldKey]) -> Vec<(FieldKey, f64)> {
    let total: f64 = keys.iter().map(|k| k.weight.max(0.0)).sum();
    keys.iter()
        .map(|k| {
            let weight = if total > 0.0 {
                k.weight.max(0.0) / total
            } else {
                1.0
            };
            (*k, weight)
        })
        .collect()
}

/// Field-length norm `1/√tokens`, rounded to three decimals.
fn field_norm(value: &str) -> f64 {
    let norm = 1.0 / (token_count(value) as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}

/// Compare two engine results: best score first, then index order.
pub fn compare_engine_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.engine_score()
        .total_cmp(&b.engine_score())
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}
