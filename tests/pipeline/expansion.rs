// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization and synonym expansion as seen through the pipeline.

use crate::common::{assert_outcome_well_formed, index_of, shelf, urls};
use shelfsearch::{SearchConfig, SearchPipeline, DEFAULT_DISPLAY_LIMIT};

#[test]
fn test_key_query_expands_to_its_terms() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let queries = pipeline.expand("低谷");
    assert_eq!(
        queries,
        vec!["低谷", "低潮", "谷底", "困境", "逆境", "崩溃", "抑郁", "迷茫"]
    );
}

#[test]
fn test_embedded_key_triggers_expansion() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let queries = pipeline.expand("原生家庭");
    assert_eq!(queries[0], "原生家庭");
    assert!(queries.iter().any(|q| q == "父母"));
    assert!(queries.iter().any(|q| q == "亲情"));
    // The query itself is also one of 家庭's terms; it must not repeat
    assert_eq!(queries.iter().filter(|q| *q == "原生家庭").count(), 1);
}

#[test]
fn test_embedded_key_reaches_synonym_only_records() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let outcome = pipeline.run("原生家庭");
    assert_outcome_well_formed(&outcome, DEFAULT_DISPLAY_LIMIT);
    let found = urls(&outcome);
    assert_eq!(found[0], "/books/family/");
    // Only reachable through the 父母 synonym
    assert!(found.contains(&"/lists/letters/"));
}

#[test]
fn test_synonym_matches_join_the_results() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let outcome = pipeline.run("低谷");
    let found = urls(&outcome);
    assert!(found.contains(&"/books/rock-bottom/"), "谷底 synonym");
    assert!(found.contains(&"/books/tide-and-bottom/"), "低潮 synonym");
    assert!(!found.contains(&"/books/alone/"));
}

#[test]
fn test_normalization_is_applied_before_search() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let plain = pipeline.run("低谷");
    let padded = pipeline.run("\u{3000} 低谷 \t");
    assert_eq!(padded.query, "低谷");
    assert_eq!(urls(&plain), urls(&padded));
    assert_eq!(plain.total, padded.total);
}

#[test]
fn test_case_folding() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let outcome = pipeline.run("SOLITUDE");
    assert_eq!(outcome.query, "solitude");
    assert_eq!(urls(&outcome).first(), Some(&"/books/solitude/"));
}

#[test]
fn test_typo_still_matches() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let outcome = pipeline.run("solitute");
    assert!(urls(&outcome).contains(&"/books/solitude/"));
}

#[test]
fn test_blank_query_is_the_empty_state() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    for raw in ["", "   ", "\u{3000}\u{3000}", "\n\t"] {
        let outcome = pipeline.run(raw);
        assert!(outcome.is_empty_query());
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.total, 0);
    }
    assert!(pipeline.expand("  ").is_empty());
}

#[test]
fn test_no_match_is_not_the_empty_state() {
    let index = shelf();
    let pipeline = SearchPipeline::new(&index, SearchConfig::default());

    let outcome = pipeline.run("zzzzqqqq");
    assert!(!outcome.is_empty_query());
    assert_eq!(outcome.total, 0);
    assert!(outcome.items.is_empty());
    assert!(index_of(&index, "/books/low/").is_some());
}
