// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline: where queries meet candidates.
//!
//! Upstream, a store narrows the candidate set with exact structural
//! filters. Here the survivors get scored against the query, cut at the
//! threshold, ordered by relevance, and paged. One pass, no index, no
//! state - the ranker is a pure function over whatever list it is handed.

mod ranker;

pub use ranker::*;
