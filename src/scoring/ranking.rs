// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: ascending by final score, stable on ties.
//!
//! Lower is better all the way through: the engine reports distance-like
//! scores and every boost delta is negative. There is no
//! secondary key. Equal scores keep their incoming order, which is
//! deduplication order, which is canonical-query-first.

use std::cmp::Ordering;

/// A deduplicated result with its composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredResult {
    pub doc_id: usize,
    /// Engine score plus boost delta.
    pub score: f64,
}

/// Compare two scored results for ranking. Lower score sorts first.
///
/// `total_cmp` keeps NaN from poisoning the sort: a NaN score sorts after
/// every real score instead of making the order unspecified.
pub fn compare_scored(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    a.score.total_cmp(&b.score)
}

/// Stable ascending sort by score.
pub fn sort_scored(results: &mut [ScoredResult]) {
    results.sort_by(compare_scored);
}
