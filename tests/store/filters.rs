//! Structural filtering: exact category and location narrowing, id
//! ordering, and the filter's serialized form.

use gala::{EventFilter, EventStore};

use super::common::sample_store;

fn names(events: &[gala::Event]) -> Vec<&str> {
    events.iter().map(|e| e.name.as_str()).collect()
}

// ============================================================================
// NARROWING
// ============================================================================

#[test]
fn test_unfiltered_find_returns_live_events_in_id_order() {
    let store = sample_store();
    let all = store.find(&EventFilter::all()).unwrap();

    let ids: Vec<u64> = all.iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        names(&all),
        ["Jazz Night", "Jazz Fest", "Rock Show", "Art Expo", "Food Fair"]
    );
}

#[test]
fn test_category_filter_narrows_exactly() {
    let store = sample_store();
    let music = store
        .find(&EventFilter::all().with_category("music"))
        .unwrap();
    assert_eq!(names(&music), ["Jazz Night", "Jazz Fest", "Rock Show"]);

    let art = store.find(&EventFilter::all().with_category("art")).unwrap();
    assert_eq!(names(&art), ["Art Expo"]);
}

#[test]
fn test_location_filter_narrows_exactly() {
    let store = sample_store();
    let berlin = store
        .find(&EventFilter::all().with_location("berlin"))
        .unwrap();
    assert_eq!(names(&berlin), ["Jazz Night", "Rock Show", "Food Fair"]);
}

#[test]
fn test_category_and_location_filters_combine_conjunctively() {
    let store = sample_store();
    let berlin_music = store
        .find(
            &EventFilter::all()
                .with_category("music")
                .with_location("berlin"),
        )
        .unwrap();
    assert_eq!(names(&berlin_music), ["Jazz Night", "Rock Show"]);
}

#[test]
fn test_filter_matching_is_exact_not_fuzzy() {
    let store = sample_store();

    // Case differences and prefixes are misses; only the ranker is fuzzy.
    for miss in ["Music", "MUSIC", "mus", "musician"] {
        let found = store.find(&EventFilter::all().with_category(miss)).unwrap();
        assert!(found.is_empty(), "category {:?} should match nothing", miss);
    }
}

#[test]
fn test_unmatched_filter_is_empty_not_error() {
    let store = sample_store();
    let found = store
        .find(&EventFilter::all().with_location("reykjavik"))
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_archived_included_only_when_asked() {
    let store = sample_store();

    let with = store
        .find(&EventFilter::all().with_category("music").with_archived())
        .unwrap();
    let without = store
        .find(&EventFilter::all().with_category("music"))
        .unwrap();

    // Silent Disco is archived and in the default category.
    assert_eq!(with.len(), 4);
    assert_eq!(without.len(), 3);
}

// ============================================================================
// SERIALIZED FORM
// ============================================================================

#[test]
fn test_filter_serializes_camel_case_and_skips_absent_fields() {
    let filter = EventFilter::all().with_category("music");
    let json = serde_json::to_string(&filter).unwrap();

    assert_eq!(json, r#"{"category":"music","includeArchived":false}"#);

    let parsed: EventFilter = serde_json::from_str(r#"{"location":"berlin"}"#).unwrap();
    assert_eq!(parsed, EventFilter::all().with_location("berlin"));
}
