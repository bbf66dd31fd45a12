// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pipeline controller: one query event in, one ranked page out.
//!
//! A run is synchronous and self-contained. It reads the index, allocates its
//! own scratch lists, and returns; nothing carries over to the next query.
//! An empty canonical query short-circuits before any other stage runs.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::fuzzy::{EditDistanceEngine, FuzzyEngine};
use crate::index::{self, SearchIndex};
use crate::scoring::boost;
use crate::search::{aggregate, dedupe};
use crate::types::SearchOutcome;
use crate::utils::normalize;

pub struct SearchPipeline<'a, E = EditDistanceEngine> {
    index: &'a SearchIndex,
    engine: E,
    config: SearchConfig,
}

impl<'a> SearchPipeline<'a> {
    /// Pipeline over `index` using the built-in engine.
    pub fn new(index: &'a SearchIndex, config: SearchConfig) -> Self {
        Self::with_engine(index, EditDistanceEngine::new(), config)
    }
}

impl SearchPipeline<'static> {
    /// Pipeline over the process-wide index.
    ///
    /// Fails with `IndexNotLoaded` until [`index::init_global`] has succeeded,
    /// so no query can run against a missing index.
    pub fn from_global(config: SearchConfig) -> Result<Self> {
        Ok(Self::new(index::global()?, config))
    }
}

impl<'a, E: FuzzyEngine> SearchPipeline<'a, E> {
    pub fn with_engine(index: &'a SearchIndex, engine: E, config: SearchConfig) -> Self {
        Self {
            index,
            engine,
            config,
        }
    }

    pub fn index(&self) -> &'a SearchIndex {
        self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The query strings a raw input would be searched as.
    pub fn expand(&self, raw: &str) -> Vec<String> {
        self.config.synonyms.expand(&normalize(raw))
    }

    /// Run every stage for one raw query.
    pub fn run(&self, raw: &str) -> SearchOutcome<'a> {
        let query = normalize(raw);
        if query.is_empty() {
            return SearchOutcome::empty();
        }

        let queries = self.config.synonyms.expand(&query);
        if queries.is_empty() {
            return SearchOutcome::empty();
        }

        let records = self.index.records();
        let merged = aggregate(&self.engine, records, &queries, &self.config.fuzzy);
        let merged_len = merged.len();
        let unique = dedupe(merged, records);
        let mut items = boost(&unique, records, &query, &self.config.boost);

        let total = items.len();
        items.truncate(self.config.display_limit);

        tracing::debug!(
            query = %query,
            expanded = queries.len(),
            merged = merged_len,
            total,
            shown = items.len(),
            "search complete"
        );

        SearchOutcome {
            items,
            total,
            query,
        }
    }
}
