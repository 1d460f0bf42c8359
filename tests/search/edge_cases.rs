//! Degenerate inputs: empty lists, empty strings, extreme thresholds,
//! and names beyond ASCII. All of these must come back as ordinary pages,
//! never as panics or errors.

use super::common::assert_page_well_formed;
use gala::{RankOptions, SearchRanker};

#[test]
fn test_empty_candidate_list_yields_empty_page() {
    let candidates: Vec<String> = Vec::new();
    let page = SearchRanker::new().rank(
        "jazz night",
        &candidates,
        RankOptions::default().on_page(3, 25),
    );

    assert!(page.is_empty());
    assert_eq!(page.total, 0);
    assert_page_well_formed(&page);
}

#[test]
fn test_empty_query_matches_no_real_names() {
    let candidates: Vec<String> = vec!["Jazz Night".to_string(), "Rock Show".to_string()];
    let page = SearchRanker::new().rank("", &candidates, RankOptions::default());

    assert!(page.is_empty(), "empty query scored {:?}", page.data.len());
    assert_eq!(page.total, 0);
}

#[test]
fn test_empty_query_still_matches_an_empty_name() {
    // Two empty strings are identical after normalization, and identical
    // strings score 100 by the metric contract. Odd, but consistent.
    let candidates: Vec<String> = vec![String::new()];
    let page = SearchRanker::new().rank("", &candidates, RankOptions::default());

    assert_eq!(page.total, 1);
    assert!((page.data[0].score - 100.0).abs() < 1e-9);
}

#[test]
fn test_whitespace_only_query_acts_like_empty() {
    let candidates: Vec<String> = vec!["Jazz Night".to_string()];
    let ranker = SearchRanker::new();

    let blank = ranker.rank(" \t \n ", &candidates, RankOptions::default());
    let empty = ranker.rank("", &candidates, RankOptions::default());
    assert_eq!(blank, empty);
}

#[test]
fn test_threshold_one_hundred_discards_even_exact_matches() {
    let candidates: Vec<String> = vec!["Jazz Night".to_string()];
    let page = SearchRanker::new().rank(
        "jazz night",
        &candidates,
        RankOptions::default().with_threshold(100.0),
    );

    assert!(page.is_empty(), "100 is not strictly above 100");
    assert_eq!(page.total, 0);
}

#[test]
fn test_very_negative_threshold_keeps_everything() {
    let candidates: Vec<String> = vec![
        "Jazz Night".to_string(),
        "zzz".to_string(),
        String::new(),
    ];
    let page = SearchRanker::new().rank(
        "qqq",
        &candidates,
        RankOptions::default().with_threshold(-5.0),
    );

    // Every score is at least 0, and 0 > -5, so nothing is cut.
    assert_eq!(page.total, candidates.len());
}

#[test]
fn test_single_candidate_list() {
    let candidates: Vec<String> = vec!["Jazz Night".to_string()];
    let page = SearchRanker::new().rank("jazz night", &candidates, RankOptions::default());

    assert_eq!(page.total, 1);
    assert_eq!(page.len(), 1);
    assert!((page.data[0].score - 100.0).abs() < 1e-9);
}

#[test]
fn test_non_ascii_names_rank_without_panicking() {
    let candidates: Vec<String> = vec![
        "తెలుగు సంగీతం".to_string(),
        "Jazz Night".to_string(),
        "ハナビ大会".to_string(),
    ];
    let page = SearchRanker::new().rank(
        "jazz night",
        &candidates,
        RankOptions::default().with_threshold(0.0).on_page(1, 0),
    );

    assert_page_well_formed(&page);
    for hit in &page.data {
        assert!(hit.score.is_finite());
        assert!(hit.score > 0.0);
        assert!(hit.score <= 100.0);
    }
    assert!(page
        .data
        .iter()
        .any(|s| s.candidate == "Jazz Night" && (s.score - 100.0).abs() < 1e-9));
}

#[test]
fn test_long_names_and_long_queries() {
    let long_name = "annual midsummer open air jazz and blues festival weekend".to_string();
    let candidates = vec![long_name.clone()];

    let exact = SearchRanker::new().rank(&long_name, &candidates, RankOptions::default());
    assert_eq!(exact.total, 1);
    assert!((exact.data[0].score - 100.0).abs() < 1e-9);

    let short = SearchRanker::new().rank("jazz", &candidates, RankOptions::default());
    assert_page_well_formed(&short);
}
