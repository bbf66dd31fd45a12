// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym expansion: one canonical query in, a small work list out.
//!
//! The table is configuration, not logic. The starter table below is tuned
//! for a Chinese reading-list site; real deployments ship their own through
//! [`SearchConfig`](crate::config::SearchConfig).
//!
//! Expansion fires two ways:
//! 1. The query *is* a key: "低谷" pulls in "低潮", "谷底", ...
//! 2. The query *contains* a key: "原生家庭" contains "家庭", so it pulls in
//!    the 家庭 terms even though "原生家庭" has no entry of its own.
//!
//! **Invariant**: the canonical query is always the first element of the
//! expansion, and no element appears twice.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::utils::normalize;

/// Starter table shipped as the default configuration.
const STARTER_TABLE: &[(&str, &[&str])] = &[
    (
        "低谷",
        &["低潮", "谷底", "困境", "逆境", "崩溃", "抑郁", "迷茫"],
    ),
    ("独处", &["孤独", "独自", "一个人", "自处", "内向"]),
    (
        "家庭",
        &["亲情", "原生家庭", "父母", "家人", "婚姻", "关系"],
    ),
    ("成长", &["成熟", "自我", "修复", "疗愈", "重建"]),
    ("爱情", &["亲密关系", "伴侣", "恋爱", "分手", "婚恋"]),
    ("意义", &["价值", "存在", "活着", "人生"]),
];

/// Key term → related terms.
///
/// Serializes as a plain JSON object. Keys are normalized on construction so
/// they compare against canonical queries.
///
/// Iteration order is the byte order of the keys, not the order they were
/// written in the config file. Embedded-key expansion follows that order, so
/// when a query contains several keys their terms are appended key by key in
/// byte order. Expansions stay reproducible; the order only matters for
/// results that tie after boosting, since the final sort is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, terms)| (normalize(&key), terms))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { entries }
    }

    /// A table with no entries. Expansion degenerates to `{query}`.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, key: &str, terms: Vec<String>) {
        let key = normalize(key);
        if !key.is_empty() {
            self.entries.insert(key, terms);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Expand a canonical query into the set of strings to search for.
    ///
    /// Returns an empty list for an empty query; callers short-circuit on that
    /// instead of running the rest of the pipeline.
    pub fn expand(&self, canonical_query: &str) -> Vec<String> {
        let query = canonical_query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<&str> = vec![query];

        if let Some(terms) = self.entries.get(query) {
            candidates.extend(terms.iter().map(String::as_str));
        }

        for (key, terms) in &self.entries {
            if key != query && query.contains(key.as_str()) {
                candidates.extend(terms.iter().map(String::as_str));
            }
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        candidates
            .into_iter()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .filter(|term| seen.insert(*term))
            .map(str::to_string)
            .collect()
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        let entries = STARTER_TABLE
            .iter()
            .map(|(key, terms)| {
                (
                    (*key).to_string(),
                    terms.iter().map(|t| (*t).to_string()).collect(),
                )
            })
            .collect();
        Self::new(entries)
    }
}

impl From<BTreeMap<String, Vec<String>>> for SynonymTable {
    fn from(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self::new(entries)
    }
}

impl From<SynonymTable> for BTreeMap<String, Vec<String>> {
    fn from(table: SynonymTable) -> Self {
        table.entries
    }
}
