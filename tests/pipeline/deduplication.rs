// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One entry per url, no matter how many expanded queries hit it.

use crate::common::{assert_outcome_well_formed, book, shelf, urls};
use shelfsearch::{
    aggregate, dedupe, EditDistanceEngine, FuzzyOptions, SearchConfig, SearchIndex,
    SearchPipeline, SynonymTable, DEFAULT_DISPLAY_LIMIT,
};

#[test]
fn test_record_matched_by_two_synonyms_appears_once() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());
    let queries = pipeline.expand("低谷");

    // 低潮 and 谷底 both hit the same record before deduplication
    let merged = aggregate(
        &EditDistanceEngine::new(),
        index.records(),
        &queries,
        &FuzzyOptions::default(),
    );
    let hits = merged
        .iter()
        .filter(|r| index.records()[r.doc_id].url == "/books/tide-and-bottom/")
        .count();
    assert!(hits >= 2);

    let outcome = pipeline.run("低谷");
    assert_outcome_well_formed(&outcome, DEFAULT_DISPLAY_LIMIT);
    let found = urls(&outcome);
    assert_eq!(
        found.iter().filter(|u| **u == "/books/tide-and-bottom/").count(),
        1
    );
}

#[test]
fn test_unlinked_records_never_surface() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let outcome = pipeline.run("低谷笔记");
    assert!(outcome.items.iter().all(|r| !r.url.is_empty()));
    assert!(!outcome.items.iter().any(|r| r.title == "低谷笔记"));
}

#[test]
fn test_duplicate_url_in_index_keeps_first_match() {
    let index = SearchIndex::new(vec![
        book("/books/same/", "独处的艺术"),
        book("/books/same/", "独处"),
    ]);
    let config = SearchConfig {
        synonyms: SynonymTable::empty(),
        ..Default::default()
    };
    let pipeline = SearchPipeline::new(&index, config);

    let merged = aggregate(
        &EditDistanceEngine::new(),
        index.records(),
        &["独处".to_string()],
        &FuzzyOptions::default(),
    );
    assert_eq!(merged.len(), 2);
    let unique = dedupe(merged.clone(), index.records());
    assert_eq!(unique, vec![merged[0]]);

    let outcome = pipeline.run("独处");
    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.items.len(), 1);
}

#[test]
fn test_null_url_record_is_skipped_while_siblings_rank() {
    let index = SearchIndex::from_json_str(
        r#"[
            {"url": null, "title": "低谷", "tags": null},
            {"url": "/books/low/", "title": "低谷", "summary": null, "section": "books"},
            {"url": "/lists/low/", "title": "低谷之后", "tags": ["低谷"], "section": "lists"}
        ]"#,
    )
    .unwrap();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let merged = aggregate(
        &EditDistanceEngine::new(),
        index.records(),
        &["低谷".to_string()],
        &FuzzyOptions::default(),
    );
    assert_eq!(merged.len(), 3);
    let unique = dedupe(merged, index.records());
    assert!(unique.iter().all(|r| r.doc_id != 0));
    assert_eq!(unique.len(), 2);

    let outcome = pipeline.run("低谷");
    assert_outcome_well_formed(&outcome, DEFAULT_DISPLAY_LIMIT);
    assert_eq!(urls(&outcome), vec!["/books/low/", "/lists/low/"]);
}
