// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fan one expanded query set out to the engine and concatenate the answers.
//!
//! No sorting, no merging of duplicates here. A record matched by three
//! expanded queries shows up three times, each with the score that query gave
//! it. Deduplication and final ordering happen downstream.

use crate::fuzzy::{FuzzyEngine, FuzzyOptions};
use crate::types::{ContentRecord, MatchResult};

/// Run every query against the engine, in order, and concatenate the results.
///
/// Output order: all hits for `queries[0]` (engine order), then all hits for
/// `queries[1]`, and so on. Since the canonical query comes first in an
/// expansion, its hits lead the merged list.
pub fn aggregate<E>(
    engine: &E,
    records: &[ContentRecord],
    queries: &[String],
    options: &FuzzyOptions,
) -> Vec<MatchResult>
where
    E: FuzzyEngine + ?Sized,
{
    let mut merged = Vec::new();
    for query in queries {
        let hits = engine.search(records, query, options);
        tracing::trace!(query = %query, hits = hits.len(), "expanded query");
        merged.extend(hits);
    }
    merged
}
