// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization and synonym expansion properties.

use proptest::prelude::*;
use shelfsearch::{normalize, SynonymTable};

/// Mixed-script input with every kind of whitespace normalization handles.
fn raw_query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z低谷家庭原生独处成长 \t\n\u{3000}]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_normalize_idempotent(raw in raw_query_strategy()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_canonical_form(raw in raw_query_strategy()) {
        let q = normalize(&raw);
        prop_assert_eq!(q.trim(), q.as_str());
        prop_assert!(!q.contains("  "));
        prop_assert!(!q.contains('\u{3000}'), "full-width space survived normalization");
        prop_assert!(!q.chars().any(|c| c.is_uppercase()));
    }

    #[test]
    fn prop_expansion_starts_with_query_and_is_unique(raw in raw_query_strategy()) {
        let q = normalize(&raw);
        let expanded = SynonymTable::default().expand(&q);

        if q.is_empty() {
            prop_assert!(expanded.is_empty());
        } else {
            prop_assert_eq!(&expanded[0], &q);
            let mut seen = std::collections::HashSet::new();
            for term in &expanded {
                prop_assert!(seen.insert(term.as_str()), "duplicate {}", term);
                prop_assert!(!term.trim().is_empty());
            }
        }
    }

    #[test]
    fn prop_empty_table_expands_to_query_only(raw in raw_query_strategy()) {
        let q = normalize(&raw);
        let expanded = SynonymTable::empty().expand(&q);
        if q.is_empty() {
            prop_assert!(expanded.is_empty());
        } else {
            prop_assert_eq!(expanded, vec![q]);
        }
    }
}
