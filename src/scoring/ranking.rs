// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate ordering: how scored candidates get sorted.
//!
//! Ranking is by score alone, descending, with a **stable** sort. Equal
//! scores keep the order the candidate list arrived in - whatever
//! deterministic order the store produced is the tiebreak, and the ranker
//! never reshuffles it.

use std::cmp::Ordering;

/// A candidate paired with its cached similarity score.
///
/// The score is computed exactly once per candidate per ranking call.
/// Sorting and pagination read this cached value; nothing downstream
/// re-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a, T> {
    pub candidate: &'a T,
    /// Similarity in [0, 100], strictly above the caller's threshold.
    pub score: f64,
}

/// Compare two scored candidates for ranking (descending score).
///
/// Metrics never produce NaN, but a misbehaving custom metric must not be
/// able to panic the sort: non-comparable pairs collapse to `Equal`, which
/// the stable sort resolves by input order.
pub fn compare_scored<T>(a: &ScoredCandidate<'_, T>, b: &ScoredCandidate<'_, T>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}
