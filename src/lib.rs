//! Fuzzy search and catalog core for event listings.
//!
//! gala keeps a catalog of events (name, category, location, tickets,
//! guests) behind an explicit store seam and ranks them against free-text
//! queries with pluggable similarity metrics. Exact structural filters
//! narrow the candidate set at the store; the ranker handles everything
//! fuzzy: normalize, score each candidate once, cut strictly at the
//! threshold, sort stably by descending score, paginate.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐      ┌─────────────┐      ┌──────────────┐
//! │  types.rs  │─────▶│  scoring/   │─────▶│   search/    │
//! │ (Event,    │      │ (metrics,   │      │ (SearchRanker│
//! │  Page, ..) │      │  ordering)  │      │  RankOptions)│
//! └────────────┘      └─────────────┘      └──────────────┘
//!       │                                         │
//!       ▼                                         ▼
//! ┌────────────┐      ┌─────────────────────────────────────┐
//! │   store/   │─────▶│             catalog.rs              │
//! │ (EventStore│      │  (EventCatalog: CRUD + ranked       │
//! │  + memory) │      │   search behind one service seam)   │
//! └────────────┘      └─────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module      | What lives there                                      |
//! |-------------|-------------------------------------------------------|
//! | `types`     | Domain types: events, drafts, patches, filters, pages |
//! | `text`      | Query and name normalization                          |
//! | `scoring`   | `SimilarityMetric` seam, Jaro-Winkler, Levenshtein    |
//! | `search`    | `SearchRanker`: score once, cut, sort, paginate       |
//! | `store`     | `EventStore` trait and the in-memory implementation   |
//! | `catalog`   | `EventCatalog` service: CRUD plus ranked search       |
//! | `cli`       | clap commands and themed terminal output              |
//! | `contracts` | Debug-build invariant checks                          |
//!
//! # Ranking a candidate list
//!
//! Anything implementing [`Named`] can be ranked; pagination and the
//! survival threshold ride along in [`RankOptions`]:
//!
//! ```
//! use gala::{RankOptions, SearchRanker};
//!
//! let ranker = SearchRanker::new();
//! let names = ["Jazz Night", "Jazz Fest", "Rock Show"];
//! let page = ranker.rank("jazz night", &names, RankOptions::default());
//!
//! assert_eq!(page.total, 2);
//! assert_eq!(*page.data[0].candidate, "Jazz Night");
//! assert_eq!(*page.data[1].candidate, "Jazz Fest");
//! ```
//!
//! # Running a catalog
//!
//! ```
//! use gala::{EventCatalog, EventDraft, EventFilter, MemoryStore, RankOptions};
//!
//! let mut catalog = EventCatalog::new(MemoryStore::new());
//! catalog.create(EventDraft::new("Jazz Night", "music", "berlin"))?;
//! catalog.create(EventDraft::new("Rock Show", "music", "berlin"))?;
//!
//! let hits = catalog.search("jazz", &EventFilter::all(), RankOptions::default())?;
//! assert_eq!(hits.data[0].event.name, "Jazz Night");
//! # Ok::<(), gala::StoreError>(())
//! ```

// Module declarations
pub mod catalog;
pub mod cli;
pub mod contracts;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;
pub mod text;
pub mod types;

// Re-exports for public API
pub use catalog::{EventCatalog, SearchHit};
pub use scoring::ranking::{compare_scored, ScoredCandidate};
pub use scoring::{Metric, SimilarityMetric, DEFAULT_SCORE_THRESHOLD, SCORE_MAX, SCORE_MIN};
pub use search::{Named, RankOptions, SearchRanker};
pub use store::{EventStore, MemoryStore, StoreError};
pub use text::normalize;
pub use types::{
    Event, EventDraft, EventFilter, EventId, EventPatch, Guest, Page, PageRequest, Ticket,
    DEFAULT_PAGE_SIZE,
};
