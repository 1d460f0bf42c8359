// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persistence seam for the catalog.
//!
//! The store is an explicit collaborator, passed to whoever needs it - never
//! ambient, never global. It answers exact-match structural queries and owns
//! record lifecycles; fuzzy matching stays out of it entirely (that's the
//! ranker's job, over whatever `find` returns).
//!
//! Absence is data here, not an error: `get` and `update` return `Option`,
//! and the lifecycle operations return whether anything changed.
//! [`StoreError`] is reserved for genuine constraint violations.
//!
//! # Invariant: live-name uniqueness
//!
//! At most one **live** event carries a given exact name. `create`, `update`
//! (rename) and `restore` all enforce it; archived events don't count, so
//! archiving an event frees its name.

mod memory;

pub use memory::MemoryStore;

use std::fmt;

use crate::types::{Event, EventDraft, EventFilter, EventId, EventPatch};

/// Errors a store can signal. Absence of a record is not one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Creation, rename, or restore collided with a live event's name
    /// (exact match).
    NameTaken { name: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NameTaken { name } => {
                write!(f, "an event named '{name}' already exists")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// The persistence collaborator: create / find / get / update / archive /
/// restore / remove.
///
/// Contract notes:
/// - `find` returns matches in ascending id order, so downstream ranking
///   ties stay deterministic.
/// - `get` and `update` return `Ok(None)` for unknown ids.
/// - The lifecycle methods return `Ok(true)` iff they changed something,
///   mirroring an affected-rows count.
pub trait EventStore {
    /// Create an event from a draft: assigns the next id and stamps
    /// `created_at`. Fails with [`StoreError::NameTaken`] if a live event
    /// already has the draft's exact name.
    fn create(&mut self, draft: EventDraft) -> Result<Event, StoreError>;

    /// All events matching the filter, ascending by id.
    fn find(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError>;

    /// One event by id, tickets and guests included. `None` if unknown.
    fn get(&self, id: EventId) -> Result<Option<Event>, StoreError>;

    /// Apply a patch to a live event and return the updated record. `None`
    /// if the id is unknown or the event is archived (restore it first).
    /// Renaming onto another live event's name fails with
    /// [`StoreError::NameTaken`].
    fn update(&mut self, id: EventId, patch: EventPatch) -> Result<Option<Event>, StoreError>;

    /// Soft-archive a live event (stamps `archived_at`). `true` iff the
    /// event existed and was live.
    fn archive(&mut self, id: EventId) -> Result<bool, StoreError>;

    /// Bring an archived event back. `true` iff the event existed and was
    /// archived. Fails with [`StoreError::NameTaken`] if a live event took
    /// the name in the meantime.
    fn restore(&mut self, id: EventId) -> Result<bool, StoreError>;

    /// Hard-delete an event, live or archived. `true` iff it existed.
    fn remove(&mut self, id: EventId) -> Result<bool, StoreError>;
}
