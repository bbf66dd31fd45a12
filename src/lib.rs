// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym-expanded fuzzy search over a book and booklist index.
//!
//! One query event goes through a fixed, synchronous pipeline:
//!
//! ```text
//! raw query
//!     │ normalize        trim, collapse whitespace, lowercase
//!     ▼
//! canonical query
//!     │ expand           synonym table lookup, exact then embedded keys
//!     ▼
//! [query, synonym, ...]
//!     │ aggregate        one engine call per query, concatenated
//!     ▼
//! Vec<MatchResult>
//!     │ dedupe           first occurrence per url wins
//!     ▼
//! Vec<MatchResult>
//!     │ boost            engine score + field deltas, stable ascending sort
//!     ▼
//! Vec<&ContentRecord>
//!     │ truncate         display limit, total kept for the summary line
//!     ▼
//! SearchOutcome
//! ```
//!
//! # Usage
//!
//! ```
//! use shelfsearch::{SearchConfig, SearchIndex, SearchPipeline};
//!
//! let index = SearchIndex::from_json_str(
//!     r#"[{"url": "/books/a/", "title": "低谷", "section": "books"}]"#,
//! )
//! .unwrap();
//! let pipeline = SearchPipeline::new(&index, SearchConfig::default());
//!
//! let outcome = pipeline.run("  低谷 ");
//! assert_eq!(outcome.total, 1);
//! assert_eq!(outcome.items[0].url, "/books/a/");
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod render;
pub mod scheduler;
pub mod scoring;
pub mod search;
pub mod synonyms;
mod types;
pub mod utils;

pub use config::{SearchConfig, DEFAULT_DISPLAY_LIMIT};
pub use error::{Error, Result};
pub use fuzzy::{EditDistanceEngine, Field, FieldKey, FuzzyEngine, FuzzyOptions};
pub use index::{IndexStats, SearchIndex};
pub use render::Locale;
pub use scheduler::{Debouncer, DEFAULT_DEBOUNCE};
pub use scoring::{boost, BoostWeights};
pub use search::{aggregate, dedupe, SearchPipeline};
pub use synonyms::SynonymTable;
pub use types::{ContentRecord, MatchResult, SearchOutcome, Section};
pub use utils::normalize;
