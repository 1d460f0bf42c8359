//! Runtime contracts for ranked and paged results.
//!
//! Debug-mode assertions that re-check what the ranking pipeline promises.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development and in tests
//!
//! The named invariants:
//!
//! | Contract                   | Meaning                                        |
//! |----------------------------|------------------------------------------------|
//! | `StrictCutoff`             | every returned score is strictly above the threshold |
//! | `ScoreRange`               | scores are finite and within [0, 100]          |
//! | `NonIncreasing`            | scores never rise across a returned page       |
//! | `PageBounds`               | `data.len() <= limit`, `total >= data.len()`, `page >= 1` |

use crate::scoring::ranking::ScoredCandidate;
use crate::scoring::{DEFAULT_SCORE_THRESHOLD, SCORE_MAX, SCORE_MIN};
use crate::types::Page;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static sanity checks on the score scale. If these fail, the crate won't
/// build.
const _: () = {
    assert!(SCORE_MIN < DEFAULT_SCORE_THRESHOLD);
    assert!(DEFAULT_SCORE_THRESHOLD < SCORE_MAX);
};

// ============================================================================
// PAGE CONTRACTS
// ============================================================================

/// Check the structural paging invariants on any page.
///
/// # Panics (debug builds only)
/// Panics if the page metadata is inconsistent with its data.
#[inline]
pub fn check_page_bounds<T>(page: &Page<T>) {
    debug_assert!(
        page.page >= 1,
        "Contract violation: PageBounds - page {} < 1",
        page.page
    );
    debug_assert!(
        page.len() <= page.limit || page.limit == 0,
        "Contract violation: PageBounds - data.len() {} > limit {}",
        page.len(),
        page.limit
    );
    debug_assert!(
        page.total >= page.len(),
        "Contract violation: PageBounds - total {} < data.len() {}",
        page.total,
        page.len()
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check everything a ranked page promises: paging bounds, score range,
/// strict threshold survival, and descending order.
///
/// # Panics (debug builds only)
/// Panics if any ranking invariant is violated.
#[inline]
pub fn check_ranked_page<T>(page: &Page<ScoredCandidate<'_, T>>, threshold: f64) {
    check_page_bounds(page);

    for (i, entry) in page.data.iter().enumerate() {
        debug_assert!(
            entry.score.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(&entry.score),
            "Contract violation: ScoreRange - data[{}].score = {}",
            i,
            entry.score
        );
        debug_assert!(
            entry.score > threshold,
            "Contract violation: StrictCutoff - data[{}].score {} <= threshold {}",
            i,
            entry.score,
            threshold
        );
    }

    for pair in page.data.windows(2) {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: NonIncreasing - adjacent scores {} < {}",
            pair[0].score,
            pair[1].score
        );
    }
}
