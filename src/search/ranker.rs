// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy ranking core: normalize, score once, cut, stable-sort, page.
//!
//! [`SearchRanker::rank`] takes a query, a borrowed candidate list, and a
//! threshold plus paging knobs, and returns one page of survivors with their
//! scores. Matching is case-insensitive (both sides are normalized) and the
//! threshold is a hard cutoff, not a soft weight.
//!
//! # Invariants
//!
//! - **SCORE_ONCE**: each candidate's name is normalized and scored exactly
//!   once per call; sorting reads the cached score.
//! - **STRICT_CUTOFF**: survivors satisfy `score > threshold`. Equality is
//!   discarded.
//! - **STABLE_ORDER**: survivors sort by descending score; equal scores keep
//!   the candidate list's order.
//! - **CLAMPED_PAGING**: `page < 1` acts as 1, `page_size == 0` means one
//!   page with everything; a page past the end is empty, never an error.
//! - **PURE**: no side effects, no shared state, reentrant. Same inputs,
//!   same page.
//!
//! In debug builds the returned page is re-checked against these invariants
//! (see `contracts`).

use crate::contracts;
use crate::scoring::ranking::{compare_scored, ScoredCandidate};
use crate::scoring::{Metric, SimilarityMetric, DEFAULT_SCORE_THRESHOLD};
use crate::text::normalize;
use crate::types::{Event, Page, PageRequest};

/// Read access to the one field fuzzy matching looks at.
///
/// Candidates are otherwise opaque payload: the ranker borrows them
/// read-only and carries them through unchanged.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Event {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

/// Knobs for a single ranking call: survival threshold plus paging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Strict survival cutoff: only `score > threshold` survives.
    pub threshold: f64,
    /// Which page of the ranked survivors to return.
    pub paging: PageRequest,
}

impl RankOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn on_page(mut self, page: usize, page_size: usize) -> Self {
        self.paging = PageRequest::new(page, page_size);
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            threshold: DEFAULT_SCORE_THRESHOLD,
            paging: PageRequest::default(),
        }
    }
}

/// Ranks candidates against a query.
///
/// Generic over the metric so custom [`SimilarityMetric`] implementations
/// slot in; [`SearchRanker::new`] gives you the Jaro-Winkler default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchRanker<M = Metric> {
    metric: M,
}

impl SearchRanker<Metric> {
    /// Ranker with the default metric.
    pub fn new() -> Self {
        SearchRanker {
            metric: Metric::JaroWinkler,
        }
    }
}

impl<M: SimilarityMetric> SearchRanker<M> {
    /// Ranker with a caller-supplied metric.
    pub fn with_metric(metric: M) -> Self {
        SearchRanker { metric }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Rank `candidates` against `query` and return the requested page.
    ///
    /// The page's `total` is the post-filter survivor count across all
    /// pages, not the candidate count - callers wanting the latter already
    /// have the list. An empty candidate list yields `total = 0` for any
    /// paging values.
    pub fn rank<'a, T: Named>(
        &self,
        query: &str,
        candidates: &'a [T],
        opts: RankOptions,
    ) -> Page<ScoredCandidate<'a, T>> {
        let needle = normalize(query);

        // Score each candidate once, keeping only strict-threshold survivors
        // with their cached score.
        let mut survivors: Vec<ScoredCandidate<'a, T>> = candidates
            .iter()
            .filter_map(|candidate| {
                let score = self.metric.score(&needle, &normalize(candidate.name()));
                (score > opts.threshold).then_some(ScoredCandidate { candidate, score })
            })
            .collect();

        // Vec::sort_by is stable: equal scores keep input order.
        survivors.sort_by(compare_scored);

        let page = Page::slice(survivors, opts.paging);
        contracts::check_ranked_page(&page, opts.threshold);
        page
    }
}
