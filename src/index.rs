// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record index: loaded once, read by every query, never modified.
//!
//! The payload is a single JSON array of [`ContentRecord`]s, produced by the
//! site build. Nothing here builds or repairs that data. A payload that isn't
//! an array of records fails the whole load, so a half-parsed index can never
//! answer queries.
//!
//! For long-running processes there's a process-wide slot with a one-time gate:
//! [`init_global`] either installs a fully loaded index or leaves the slot
//! empty, and there is no way to replace it afterwards.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::types::{ContentRecord, Section};

/// An ordered, immutable collection of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    records: Vec<ContentRecord>,
}

impl SearchIndex {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ContentRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<ContentRecord> = serde_json::from_reader(io::BufReader::new(reader))?;
        Ok(Self::new(records))
    }

    /// Load from a file path, or from stdin when the path is `-`.
    ///
    /// Always reads the source fresh; there is no on-disk cache to go stale.
    pub fn load(path: &Path) -> Result<Self> {
        let index = if path.as_os_str() == "-" {
            Self::from_reader(io::stdin().lock())?
        } else {
            let content = fs::read_to_string(path).map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_json_str(&content)?
        };

        let stats = index.stats();
        tracing::info!(
            path = %path.display(),
            records = stats.records,
            books = stats.books,
            lists = stats.lists,
            unlinked = stats.unlinked,
            "loaded search index"
        );
        Ok(index)
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn get(&self, doc_id: usize) -> Option<&ContentRecord> {
        self.records.get(doc_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record counts by section, plus records that can never be shown.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            records: self.records.len(),
            ..Default::default()
        };
        for record in &self.records {
            match record.section {
                Section::Books => stats.books += 1,
                Section::Lists => stats.lists += 1,
                Section::Other => stats.other += 1,
            }
            if record.link().is_none() {
                stats.unlinked += 1;
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub records: usize,
    pub books: usize,
    pub lists: usize,
    pub other: usize,
    /// Records without a usable url.
    pub unlinked: usize,
}

static GLOBAL_INDEX: OnceLock<SearchIndex> = OnceLock::new();

/// Install the process-wide index.
///
/// Runs `loader` only if no index is installed yet. A loader error is returned
/// as-is and leaves the slot empty. Calling again after a successful init
/// returns [`Error::IndexAlreadyLoaded`] without running the loader.
pub fn init_global<F>(loader: F) -> Result<&'static SearchIndex>
where
    F: FnOnce() -> Result<SearchIndex>,
{
    if GLOBAL_INDEX.get().is_some() {
        return Err(Error::IndexAlreadyLoaded);
    }
    let index = loader()?;
    GLOBAL_INDEX.set(index).map_err(|_| Error::IndexAlreadyLoaded)?;
    global()
}

/// The process-wide index, or [`Error::IndexNotLoaded`] before [`init_global`].
pub fn global() -> Result<&'static SearchIndex> {
    GLOBAL_INDEX.get().ok_or(Error::IndexNotLoaded)
}
