//! Case, whitespace, and diacritic insensitivity of matching.
//!
//! Both the query and the candidate names are normalized before scoring, so
//! none of these variations should change what matches or how well.

use super::common::{hit_names, sample_catalog};
use gala::{EventFilter, RankOptions, SearchRanker};

fn names() -> Vec<String> {
    ["Jazz Night", "Jazz Fest", "Rock Show"]
        .into_iter()
        .map(String::from)
        .collect()
}

// ============================================================================
// CASE
// ============================================================================

#[test]
fn test_query_case_never_changes_the_page() {
    let candidates = names();
    let ranker = SearchRanker::new();
    let reference = ranker.rank("jazz night", &candidates, RankOptions::default());

    for query in ["JAZZ NIGHT", "Jazz Night", "jAzZ nIgHt"] {
        let page = ranker.rank(query, &candidates, RankOptions::default());
        assert_eq!(page, reference, "query {:?} ranked differently", query);
    }
}

#[test]
fn test_candidate_case_never_changes_the_score() {
    let shouty: Vec<String> = vec!["JAZZ NIGHT".to_string()];
    let page = SearchRanker::new().rank("jazz night", &shouty, RankOptions::default());

    assert_eq!(page.total, 1);
    assert!(
        (page.data[0].score - 100.0).abs() < 1e-9,
        "case difference cost score: {}",
        page.data[0].score
    );
}

#[test]
fn test_catalog_search_is_case_insensitive() {
    let catalog = sample_catalog();
    let upper = catalog
        .search("JAZZ NIGHT", &EventFilter::all(), RankOptions::default())
        .unwrap();
    let lower = catalog
        .search("jazz night", &EventFilter::all(), RankOptions::default())
        .unwrap();

    assert_eq!(upper, lower);
    assert_eq!(hit_names(&upper), ["Jazz Night", "Jazz Fest"]);
}

// ============================================================================
// WHITESPACE
// ============================================================================

#[test]
fn test_whitespace_runs_collapse_before_matching() {
    let candidates = names();
    let ranker = SearchRanker::new();

    let padded = ranker.rank("  jazz \t night ", &candidates, RankOptions::default());
    let plain = ranker.rank("jazz night", &candidates, RankOptions::default());
    assert_eq!(padded, plain);
}

#[test]
fn test_padded_candidate_still_matches_exactly() {
    let padded: Vec<String> = vec![" Jazz   Night ".to_string()];
    let page = SearchRanker::new().rank("jazz night", &padded, RankOptions::default());

    assert_eq!(page.total, 1);
    assert!((page.data[0].score - 100.0).abs() < 1e-9);
}

// ============================================================================
// DIACRITICS
// ============================================================================

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_accented_names_match_plain_queries() {
    use super::common::scored_names;

    let candidates: Vec<String> = vec!["Café Noir".to_string(), "Fête Électro".to_string()];
    let ranker = SearchRanker::new();

    let cafe = ranker.rank("cafe noir", &candidates, RankOptions::default());
    assert_eq!(scored_names(&cafe), ["Café Noir"]);
    assert!((cafe.data[0].score - 100.0).abs() < 1e-9);

    let fete = ranker.rank("fete electro", &candidates, RankOptions::default());
    assert_eq!(scored_names(&fete), ["Fête Électro"]);
    assert!((fete.data[0].score - 100.0).abs() < 1e-9);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_accented_queries_match_plain_names() {
    let candidates: Vec<String> = vec!["Cafe Noir".to_string()];
    let page = SearchRanker::new().rank("Café Noir", &candidates, RankOptions::default());

    assert_eq!(page.total, 1);
    assert!((page.data[0].score - 100.0).abs() < 1e-9);
}
