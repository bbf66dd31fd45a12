// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural invariants of deduplication, boosting and the final outcome.

use std::collections::HashSet;

use proptest::prelude::*;
use shelfsearch::scoring::rank;
use shelfsearch::{
    dedupe, BoostWeights, ContentRecord, MatchResult, SearchConfig, SearchIndex, SearchPipeline,
    Section,
};

use crate::common::assert_outcome_well_formed;

const WORDS: &[&str] = &["低谷", "家庭", "读书", "孤独", "成长", "night", "walden", "tide"];

fn section_strategy() -> impl Strategy<Value = Section> {
    prop::sample::select(vec![Section::Books, Section::Lists, Section::Other])
}

fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..4)
        .prop_map(|words| words.concat())
}

/// Records whose urls come from a small pool, so collisions are common.
fn record_strategy() -> impl Strategy<Value = ContentRecord> {
    (0..12usize, title_strategy(), section_strategy()).prop_map(|(slot, title, section)| {
        ContentRecord {
            url: if slot == 0 {
                String::new()
            } else {
                format!("/r/{}/", slot)
            },
            title,
            section,
            ..Default::default()
        }
    })
}

fn corpus_strategy() -> impl Strategy<Value = Vec<ContentRecord>> {
    prop::collection::vec(record_strategy(), 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_dedupe_unique_and_shrinking(
        records in corpus_strategy(),
        picks in prop::collection::vec(0..80usize, 0..120),
    ) {
        let merged: Vec<MatchResult> = picks
            .iter()
            .map(|&doc_id| MatchResult::new(doc_id, 0.5))
            .collect();
        let unique = dedupe(merged.clone(), &records);

        prop_assert!(unique.len() <= merged.len());
        let mut seen = HashSet::new();
        for r in &unique {
            let rec = records.get(r.doc_id);
            prop_assert!(rec.is_some(), "out-of-range doc_id kept");
            let url = rec.map(|rec| rec.url.as_str()).unwrap_or_default();
            prop_assert!(!url.is_empty());
            prop_assert!(seen.insert(url), "duplicate url {}", url);
        }
        // Every linkable url that was merged survives
        let expected: HashSet<&str> = merged
            .iter()
            .filter_map(|r| records.get(r.doc_id))
            .map(|rec| rec.url.as_str())
            .filter(|u| !u.is_empty())
            .collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn prop_outcome_capped_and_unique(
        records in corpus_strategy(),
        query in prop::sample::select(WORDS.to_vec()),
        limit in 1..40usize,
    ) {
        let index = SearchIndex::new(records);
        let config = SearchConfig { display_limit: limit, ..Default::default() };
        let pipeline = SearchPipeline::new(&index, config);

        let outcome = pipeline.run(query);
        assert_outcome_well_formed(&outcome, limit);
        prop_assert!(outcome.total <= index.len());
    }

    #[test]
    fn prop_tier_dominance(
        base in 0.0..1.0f64,
        suffix in prop::sample::select(vec!["之后", "日记", " notes"]),
        prefix in prop::sample::select(vec!["走出", "关于", "the "]),
        query in prop::sample::select(vec!["低谷", "walden", "孤独"]),
        section in section_strategy(),
    ) {
        let make = |title: String| ContentRecord {
            url: format!("/{}/", title),
            title,
            section,
            ..Default::default()
        };
        let records = vec![
            make(format!("{}{}", prefix, query)),
            make(format!("{}{}", query, suffix)),
            make(query.to_string()),
        ];
        let results: Vec<MatchResult> = (0..3).map(|i| MatchResult::new(i, base)).collect();

        let ranked = rank(&results, &records, query, &BoostWeights::default());
        let score_of = |doc_id: usize| {
            ranked.iter().find(|s| s.doc_id == doc_id).map(|s| s.score).unwrap_or(f64::NAN)
        };
        prop_assert!(score_of(2) <= score_of(1));
        prop_assert!(score_of(1) <= score_of(0));
        prop_assert_eq!(ranked[0].doc_id, 2);
    }

    #[test]
    fn prop_rank_is_sorted(
        scores in prop::collection::vec(prop::option::of(0.0..1.0f64), 0..40),
        sections in prop::collection::vec(section_strategy(), 40),
    ) {
        let records: Vec<ContentRecord> = sections
            .iter()
            .enumerate()
            .map(|(i, &section)| ContentRecord {
                url: format!("/{}/", i),
                title: format!("t{}", i),
                section,
                ..Default::default()
            })
            .collect();
        let results: Vec<MatchResult> = scores
            .iter()
            .enumerate()
            .map(|(doc_id, &score)| MatchResult { doc_id, score })
            .collect();

        let ranked = rank(&results, &records, "", &BoostWeights::default());
        prop_assert_eq!(ranked.len(), results.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
        }
    }
}
