// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deployment config files driving the pipeline.

use std::io::Write;

use crate::common::{book, urls};
use shelfsearch::{Error, SearchConfig, SearchIndex, SearchPipeline};

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_synonyms_replace_starter_table() {
    let file = write_config(r#"{"synonyms": {"睡眠": ["失眠", "休息"]}}"#);
    let config = SearchConfig::load(file.path()).unwrap();

    let index = SearchIndex::new(vec![book("/books/insomnia/", "失眠日记")]);
    let pipeline = SearchPipeline::new(&index, config);

    assert_eq!(pipeline.expand("睡眠"), vec!["睡眠", "失眠", "休息"]);
    assert_eq!(pipeline.expand("低谷"), vec!["低谷"]);
    assert_eq!(urls(&pipeline.run("睡眠")), vec!["/books/insomnia/"]);
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let file = write_config(r#"{"display_limit": 3}"#);
    let config = SearchConfig::load(file.path()).unwrap();

    assert_eq!(config.display_limit, 3);
    assert_eq!(config.fuzzy, SearchConfig::default().fuzzy);
    assert!(!config.synonyms.is_empty());
}

#[test]
fn test_strict_threshold_drops_typos() {
    let file = write_config(r#"{"fuzzy": {"threshold": 0.0}}"#);
    let config = SearchConfig::load(file.path()).unwrap();

    let index = SearchIndex::new(vec![book("/books/solitude/", "Solitude")]);
    let pipeline = SearchPipeline::new(&index, config);

    assert_eq!(pipeline.run("solitute").total, 0);
    assert_eq!(pipeline.run("solitude").total, 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let file = write_config(r#"{"display_limit": 0}"#);
    assert!(matches!(
        SearchConfig::load(file.path()),
        Err(Error::Config(_))
    ));

    let file = write_config("not json");
    assert!(matches!(SearchConfig::load(file.path()), Err(Error::Json(_))));
}
