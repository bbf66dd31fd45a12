// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how the final order gets decided.
//!
//! The engine's score only measures textual similarity. The booster layers
//! domain preferences on top (an exact title beats a title prefix beats a
//! title substring, tags count less, booklists get a nudge) and the ranking
//! sorts the sum ascending.

mod boost;
pub mod ranking;

pub use boost::*;
