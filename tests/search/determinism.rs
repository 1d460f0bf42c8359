//! Determinism of ranking: same inputs, same page, every time.
//!
//! Ranking is a pure function of the query, the candidate list, and the
//! options. Nothing here may depend on hash ordering, clocks, or hidden
//! state between calls.

use super::common::{hit_names, hit_scores, sample_catalog};
use gala::{EventFilter, RankOptions, SearchRanker};

fn names() -> Vec<String> {
    [
        "Jazz Night",
        "Jazz Fest",
        "Jazz Brunch",
        "Rock Show",
        "Art Expo",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[test]
fn test_repeated_rank_calls_are_identical() {
    let candidates = names();
    let ranker = SearchRanker::new();
    let opts = RankOptions::default().with_threshold(40.0).on_page(1, 0);

    let first = ranker.rank("jazz", &candidates, opts);
    for run in 0..10 {
        let again = ranker.rank("jazz", &candidates, opts);

        assert_eq!(again.total, first.total, "total drifted on run {}", run);
        for (i, (a, b)) in first.data.iter().zip(again.data.iter()).enumerate() {
            assert_eq!(
                a.candidate, b.candidate,
                "run {}: candidate at {} changed",
                run, i
            );
            assert!(
                (a.score - b.score).abs() < f64::EPSILON,
                "run {}: score at {} drifted from {} to {}",
                run,
                i,
                a.score,
                b.score
            );
        }
    }
}

#[test]
fn test_rank_leaves_candidates_untouched() {
    let candidates = names();
    let before = candidates.clone();

    SearchRanker::new().rank("jazz night", &candidates, RankOptions::default());

    assert_eq!(candidates, before);
}

#[test]
fn test_separate_rankers_agree() {
    let candidates = names();
    let a = SearchRanker::new().rank("jazz fest", &candidates, RankOptions::default());
    let b = SearchRanker::new().rank("jazz fest", &candidates, RankOptions::default());
    assert_eq!(a, b);
}

#[test]
fn test_catalog_search_is_stable_across_calls() {
    let catalog = sample_catalog();
    let opts = RankOptions::default().on_page(1, 0);

    let first = catalog.search("jazz", &EventFilter::all(), opts).unwrap();
    let second = catalog.search("jazz", &EventFilter::all(), opts).unwrap();

    assert_eq!(first, second);
    assert_eq!(hit_names(&first), hit_names(&second));
    assert_eq!(hit_scores(&first), hit_scores(&second));
}
