// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries at the pipeline to verify it never panics and
//! never hands back a malformed outcome.

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use shelfsearch::{ContentRecord, SearchConfig, SearchIndex, SearchPipeline, Section};

const TITLES: &[&str] = &[
    "低谷",
    "走出低谷",
    "原生家庭",
    "写给父母的信",
    "一个人的午后",
    "Walden",
    "Solitude",
    "晚安故事",
    "",
    "低潮与谷底",
];

/// Small shelf with colliding urls and one unlinked record.
fn shelf() -> SearchIndex {
    SearchIndex::new(
        TITLES
            .iter()
            .enumerate()
            .map(|(i, title)| ContentRecord {
                url: if i == 8 {
                    String::new()
                } else {
                    format!("/r/{}/", i % 7)
                },
                title: title.to_string(),
                tags: vec!["心理".to_string(), title.to_string()],
                section: if i % 2 == 0 {
                    Section::Books
                } else {
                    Section::Lists
                },
                ..Default::default()
            })
            .collect(),
    )
}

fuzz_target!(|query: &[u8]| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(shelf);
    let pipeline = SearchPipeline::new(index, SearchConfig::default());

    // Cap query length to avoid timeout
    let query: String = String::from_utf8_lossy(query).chars().take(64).collect();

    // INVARIANT 1: run() never panics
    let outcome = pipeline.run(&query);

    // INVARIANT 2: capped, with the total behind it
    assert_eq!(
        outcome.items.len(),
        outcome.total.min(pipeline.config().display_limit)
    );

    // INVARIANT 3: unique, linkable urls
    let mut seen = HashSet::new();
    for rec in &outcome.items {
        assert!(!rec.url.is_empty());
        assert!(seen.insert(rec.url.as_str()));
    }

    // INVARIANT 4: blank input is the empty state
    if shelfsearch::normalize(&query).is_empty() {
        assert!(outcome.is_empty_query());
    }
});
