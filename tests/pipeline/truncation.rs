// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display cap and the total behind it.

use crate::common::{assert_outcome_well_formed, book};
use shelfsearch::render::summary;
use shelfsearch::{Locale, SearchConfig, SearchIndex, SearchPipeline, DEFAULT_DISPLAY_LIMIT};

fn many_books(n: usize) -> SearchIndex {
    SearchIndex::new(
        (0..n)
            .map(|i| book(&format!("/books/{}/", i), &format!("读书笔记 {}", i)))
            .collect(),
    )
}

#[test]
fn test_caps_at_display_limit_and_keeps_total() {
    let index = many_books(45);
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let outcome = pipeline.run("读书");
    assert_eq!(outcome.total, 45);
    assert_eq!(outcome.items.len(), DEFAULT_DISPLAY_LIMIT);
    assert_outcome_well_formed(&outcome, DEFAULT_DISPLAY_LIMIT);
    assert_eq!(summary(&outcome, Locale::En), "showing 30 of 45 results");
}

#[test]
fn test_under_limit_shows_everything() {
    let index = many_books(7);
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let outcome = pipeline.run("读书");
    assert_eq!(outcome.total, 7);
    assert_eq!(outcome.items.len(), 7);
}

#[test]
fn test_custom_display_limit() {
    let index = many_books(12);
    let config = SearchConfig {
        display_limit: 5,
        ..Default::default()
    };
    let pipeline = SearchPipeline::new(&index, config);

    let outcome = pipeline.run("读书");
    assert_outcome_well_formed(&outcome, 5);
    assert_eq!(outcome.total, 12);
}
