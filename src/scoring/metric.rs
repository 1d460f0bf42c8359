// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity metrics over normalized strings.
//!
//! A metric answers one question: how close are these two strings, on a
//! 0-100 scale? The ranker treats the answer as opaque - it filters on it,
//! sorts on it, and never second-guesses it. That makes the metric a clean
//! seam: anything implementing [`SimilarityMetric`] plugs in.
//!
//! # Metric contract
//!
//! - Result is in `[SCORE_MIN, SCORE_MAX]` ([0, 100]), never NaN.
//! - 100 means identical input strings (inputs are pre-normalized, so this
//!   is "identical after normalization" from the caller's point of view).
//! - Roughly symmetric, and decreasing as the strings diverge.
//! - Pure: same inputs, same score, no side effects.
//!
//! # Why Jaro-Winkler is the default
//!
//! Against the query "jazz night", "Jazz Fest" should rank as a plausible
//! hit at the default threshold of 70. Jaro-Winkler's common-prefix affinity
//! scores it ≈ 85; a plain normalized edit-distance ratio scores it 60 and
//! throws it away. Event names share prefixes far more than they share
//! suffixes, so prefix affinity is the behavior people expect.

/// Maximum similarity score: identical strings.
pub const SCORE_MAX: f64 = 100.0;

/// Minimum similarity score: nothing in common.
pub const SCORE_MIN: f64 = 0.0;

/// Default survival threshold. Filtering is strict: candidates must score
/// strictly above this to survive.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 70.0;

/// A pluggable string-similarity measure on the 0-100 scale.
///
/// Implementations receive pre-normalized strings (lowercased, whitespace
/// collapsed, diacritics stripped when the `unicode-normalization` feature is
/// on) and must honor the metric contract in the module docs.
pub trait SimilarityMetric {
    /// Similarity of `a` and `b` in `[SCORE_MIN, SCORE_MAX]`.
    fn score(&self, a: &str, b: &str) -> f64;
}

/// The built-in metrics.
///
/// Both delegate to strsim and scale its `[0, 1]` ratios up to `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Jaro-Winkler similarity: rewards shared prefixes. The default.
    #[default]
    JaroWinkler,
    /// Normalized Levenshtein: 1 minus edit distance over the longer length.
    Levenshtein,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::JaroWinkler => "jaro-winkler",
            Metric::Levenshtein => "levenshtein",
        }
    }
}

impl SimilarityMetric for Metric {
    fn score(&self, a: &str, b: &str) -> f64 {
        let ratio = match self {
            Metric::JaroWinkler => strsim::jaro_winkler(a, b),
            Metric::Levenshtein => strsim::normalized_levenshtein(a, b),
        };
        ratio * SCORE_MAX
    }
}
