// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity scoring: how candidates get their numbers.
//!
//! One seam ([`SimilarityMetric`]), two built-in metrics backed by strsim,
//! and the comparator that turns cached scores into a ranking. Scores live on
//! a 0-100 scale where 100 means identical after normalization, and the
//! default survival threshold is 70 (strict: a candidate must score *above*
//! it).

mod metric;
pub mod ranking;

pub use metric::*;
