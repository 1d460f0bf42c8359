//! The catalog service: a store and a ranker behind one façade.
//!
//! This is the seam a controller or CLI talks to. CRUD calls pass through to
//! the [`EventStore`]; search fetches candidates with the store's exact
//! filters and hands them to the [`SearchRanker`] for fuzzy relevance. The
//! store is owned explicitly - there is no ambient persistence handle
//! anywhere in the crate.

use serde::{Deserialize, Serialize};

use crate::contracts;
use crate::scoring::{Metric, SimilarityMetric};
use crate::search::{RankOptions, SearchRanker};
use crate::store::{EventStore, StoreError};
use crate::types::{Event, EventDraft, EventFilter, EventId, EventPatch, Page, PageRequest};

/// An owned search result: the event plus its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub event: Event,
    /// Similarity in [0, 100], strictly above the search threshold.
    pub score: f64,
}

/// CRUD plus fuzzy search over one event store.
#[derive(Debug, Clone)]
pub struct EventCatalog<S, M = Metric> {
    store: S,
    ranker: SearchRanker<M>,
}

impl<S: EventStore> EventCatalog<S> {
    /// Catalog over `store` with the default Jaro-Winkler ranker.
    pub fn new(store: S) -> Self {
        EventCatalog {
            store,
            ranker: SearchRanker::new(),
        }
    }
}

impl<S: EventStore, M: SimilarityMetric> EventCatalog<S, M> {
    /// Catalog with a caller-chosen similarity metric.
    pub fn with_metric(store: S, metric: M) -> Self {
        EventCatalog {
            store,
            ranker: SearchRanker::with_metric(metric),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // CRUD pass-through ------------------------------------------------------

    pub fn create(&mut self, draft: EventDraft) -> Result<Event, StoreError> {
        self.store.create(draft)
    }

    /// Filtered, paginated listing in ascending id order.
    pub fn list(
        &self,
        filter: &EventFilter,
        paging: PageRequest,
    ) -> Result<Page<Event>, StoreError> {
        let matches = self.store.find(filter)?;
        let page = Page::slice(matches, paging);
        contracts::check_page_bounds(&page);
        Ok(page)
    }

    pub fn get(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        self.store.get(id)
    }

    pub fn update(&mut self, id: EventId, patch: EventPatch) -> Result<Option<Event>, StoreError> {
        self.store.update(id, patch)
    }

    pub fn archive(&mut self, id: EventId) -> Result<bool, StoreError> {
        self.store.archive(id)
    }

    pub fn restore(&mut self, id: EventId) -> Result<bool, StoreError> {
        self.store.restore(id)
    }

    pub fn remove(&mut self, id: EventId) -> Result<bool, StoreError> {
        self.store.remove(id)
    }

    // Search -----------------------------------------------------------------

    /// Fuzzy search over the events matching `filter`.
    ///
    /// Exact structural narrowing happens in the store, relevance ranking in
    /// the ranker, and the returned page owns its events. Candidates arrive
    /// in id order, so equal-score hits come back in id order too.
    pub fn search(
        &self,
        query: &str,
        filter: &EventFilter,
        opts: RankOptions,
    ) -> Result<Page<SearchHit>, StoreError> {
        let candidates = self.store.find(filter)?;
        let ranked = self.ranker.rank(query, &candidates, opts);
        Ok(ranked.map(|scored| SearchHit {
            event: scored.candidate.clone(),
            score: scored.score,
        }))
    }
}
