// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! URL-keyed result deduplication.
//!
//! A record should appear at most once in search results. With synonym
//! expansion that's easy to get wrong: "低谷" and "困境" can both hit the same
//! booklist, and the merged list carries it twice. The url is the key, not the
//! doc_id, because the url is what the reader navigates to. Two index entries
//! with the same url are the same result as far as anyone clicking is concerned.
//!
//! **Invariant**: Each url appears at most once in the output, and the output
//! is never longer than the input.
//!
//! **Policy**: first occurrence wins. The canonical query is issued first, so
//! its hits are the ones retained.

use std::collections::HashSet;

use crate::types::{ContentRecord, MatchResult};

/// Order-preserving merger keyed on record url.
///
/// # Example
///
/// ```ignore
/// let mut deduper = UrlDeduper::new(&index.records);
/// deduper.merge_all(merged);
/// let unique = deduper.into_results();
/// ```
pub struct UrlDeduper<'a> {
    records: &'a [ContentRecord],
    seen: HashSet<&'a str>,
    kept: Vec<MatchResult>,
    unlinked: usize,
}

impl<'a> UrlDeduper<'a> {
    pub fn new(records: &'a [ContentRecord]) -> Self {
        Self {
            records,
            seen: HashSet::new(),
            kept: Vec::new(),
            unlinked: 0,
        }
    }

    pub fn with_capacity(records: &'a [ContentRecord], capacity: usize) -> Self {
        Self {
            records,
            seen: HashSet::with_capacity(capacity),
            kept: Vec::with_capacity(capacity),
            unlinked: 0,
        }
    }

    /// Keep `result` if its url hasn't been seen. Returns whether it was kept.
    ///
    /// Results pointing outside the index or at a record without a url are
    /// dropped and counted in [`unlinked`](Self::unlinked).
    pub fn merge(&mut self, result: MatchResult) -> bool {
        let Some(url) = self.records.get(result.doc_id).and_then(ContentRecord::link) else {
            self.unlinked += 1;
            return false;
        };

        if self.seen.insert(url) {
            self.kept.push(result);
            true
        } else {
            false
        }
    }

    pub fn merge_all(&mut self, results: impl IntoIterator<Item = MatchResult>) {
        for result in results {
            self.merge(result);
        }
    }

    pub fn len(&self) -> usize {
        self.kept.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    /// How many results were dropped for having no usable url.
    pub fn unlinked(&self) -> usize {
        self.unlinked
    }

    /// The retained results, in first-seen order.
    pub fn into_results(self) -> Vec<MatchResult> {
        self.kept
    }
}

/// Collapse `merged` to one result per url, keeping first occurrences.
pub fn dedupe(merged: Vec<MatchResult>, records: &[ContentRecord]) -> Vec<MatchResult> {
    let mut deduper = UrlDeduper::with_capacity(records, merged.len());
    deduper.merge_all(merged);
    if deduper.unlinked() > 0 {
        tracing::warn!(
            dropped = deduper.unlinked(),
            "dropped matches without a usable url"
        );
    }
    deduper.into_results()
}
