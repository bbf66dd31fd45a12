// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search stages: where the rubber meets the road.
//!
//! Normalize, expand, fan out to the engine, collapse duplicates, boost, cap.
//! Each stage is a plain function so it can be tested on its own;
//! [`SearchPipeline`] strings them together.

pub mod aggregate;
pub mod dedup;
mod pipeline;

pub use aggregate::aggregate;
pub use dedup::{dedupe, UrlDeduper};
pub use pipeline::*;
