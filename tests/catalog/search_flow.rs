//! Search behavior through the catalog facade.

use gala::{EventCatalog, EventFilter, Metric, RankOptions, DEFAULT_SCORE_THRESHOLD};

use super::common::{
    assert_page_well_formed, assert_ranked_scores, hit_names, hit_scores, sample_catalog,
    sample_store,
};

#[test]
fn test_search_skips_archived_events_by_default() {
    let catalog = sample_catalog();

    let hidden = catalog
        .search("silent disco", &EventFilter::all(), RankOptions::default())
        .unwrap();
    assert!(hidden.is_empty());
    assert_eq!(hidden.total, 0);

    let seen = catalog
        .search(
            "silent disco",
            &EventFilter::all().with_archived(),
            RankOptions::default(),
        )
        .unwrap();
    assert_eq!(hit_names(&seen), ["Silent Disco"]);
    assert!((seen.data[0].score - 100.0).abs() < 1e-9);
}

#[test]
fn test_structural_filter_narrows_before_ranking() {
    let catalog = sample_catalog();

    // Two events survive "jazz night" unfiltered; only one of them is in
    // paris, and total reflects the narrowed set.
    let paris_only = catalog
        .search(
            "jazz night",
            &EventFilter::all().with_location("paris"),
            RankOptions::default(),
        )
        .unwrap();

    assert_eq!(hit_names(&paris_only), ["Jazz Fest"]);
    assert_eq!(paris_only.total, 1);
}

#[test]
fn test_lower_threshold_widens_the_net() {
    let catalog = sample_catalog();

    let strict = catalog
        .search("jazz night", &EventFilter::all(), RankOptions::default())
        .unwrap();
    assert_eq!(strict.total, 2);

    let loose = catalog
        .search(
            "jazz night",
            &EventFilter::all(),
            RankOptions::default().with_threshold(40.0),
        )
        .unwrap();

    // Rock Show and Food Fair tie exactly under Jaro-Winkler, so id order
    // decides between them.
    assert_eq!(
        hit_names(&loose),
        ["Jazz Night", "Jazz Fest", "Art Expo", "Rock Show", "Food Fair"]
    );
    assert_ranked_scores(&hit_scores(&loose), 40.0);
}

#[test]
fn test_paging_options_flow_through_to_the_hit_page() {
    let catalog = sample_catalog();

    let opts = RankOptions::default().with_threshold(0.0).on_page(2, 2);
    let page = catalog
        .search("jazz night", &EventFilter::all(), opts)
        .unwrap();

    assert_page_well_formed(&page);
    assert_eq!(page.total, 5);
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 2);
    assert_eq!(hit_names(&page), ["Art Expo", "Rock Show"]);
}

#[test]
fn test_the_metric_is_pluggable_per_catalog() {
    let jaro = EventCatalog::new(sample_store());
    let lev = EventCatalog::with_metric(sample_store(), Metric::Levenshtein);
    let opts = RankOptions::default();

    let jaro_hits = jaro
        .search("jazz night", &EventFilter::all(), opts)
        .unwrap();
    let lev_hits = lev.search("jazz night", &EventFilter::all(), opts).unwrap();

    // Jaro-Winkler keeps "Jazz Fest" above the default cutoff; edit distance
    // puts it at exactly 60 and drops it.
    assert_eq!(hit_names(&jaro_hits), ["Jazz Night", "Jazz Fest"]);
    assert_eq!(hit_names(&lev_hits), ["Jazz Night"]);
    assert_ranked_scores(&hit_scores(&lev_hits), DEFAULT_SCORE_THRESHOLD);
}

#[test]
fn test_hits_own_their_events_and_outlive_the_catalog() {
    let catalog = sample_catalog();
    let hits = catalog
        .search("jazz night", &EventFilter::all(), RankOptions::default())
        .unwrap();

    let expected = catalog.get(hits.data[0].event.id).unwrap().unwrap();
    assert_eq!(hits.data[0].event, expected);

    drop(catalog);
    assert_eq!(hit_names(&hits), ["Jazz Night", "Jazz Fest"]);
}

#[test]
fn test_search_hit_serializes_camel_case() {
    let catalog = sample_catalog();
    let hits = catalog
        .search("jazz night", &EventFilter::all(), RankOptions::default())
        .unwrap();

    let json = serde_json::to_value(&hits.data[0]).unwrap();
    assert_eq!(json["score"], 100.0);
    assert_eq!(json["event"]["name"], "Jazz Night");
    assert!(json["event"]["createdAt"].is_string());
}
