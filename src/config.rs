// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deployment configuration.
//!
//! Every knob has a default, so `{}` is a valid config file and a partial file
//! only overrides what it names:
//!
//! ```json
//! {
//!   "synonyms": { "睡眠": ["失眠", "休息"] },
//!   "fuzzy": { "threshold": 0.3 },
//!   "boost": { "lists_section": 0.0 },
//!   "display_limit": 20
//! }
//! ```
//!
//! Note that `synonyms` replaces the starter table wholesale rather than
//! merging into it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fuzzy::FuzzyOptions;
use crate::scoring::BoostWeights;
use crate::synonyms::SynonymTable;

/// Maximum number of results shown for one query.
pub const DEFAULT_DISPLAY_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub synonyms: SynonymTable,
    pub fuzzy: FuzzyOptions,
    pub boost: BoostWeights,
    pub display_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            synonyms: SynonymTable::default(),
            fuzzy: FuzzyOptions::default(),
            boost: BoostWeights::default(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Reject values that would make every search come back empty or panic.
    pub fn validate(&self) -> Result<()> {
        if !self.fuzzy.threshold.is_finite() || self.fuzzy.threshold < 0.0 {
            return Err(Error::Config(format!(
                "fuzzy.threshold must be a non-negative number, got {}",
                self.fuzzy.threshold
            )));
        }
        if self.fuzzy.keys.is_empty() {
            return Err(Error::Config("fuzzy.keys must name at least one field".into()));
        }
        if self.fuzzy.keys.iter().any(|k| !k.weight.is_finite() || k.weight < 0.0) {
            return Err(Error::Config("fuzzy.keys weights must be non-negative".into()));
        }
        if self.display_limit == 0 {
            return Err(Error::Config("display_limit must be at least 1".into()));
        }
        Ok(())
    }
}
