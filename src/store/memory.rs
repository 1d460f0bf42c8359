// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory event store: a BTreeMap and a counter.
//!
//! The map is a `BTreeMap` specifically for its sorted iteration - `find`
//! promises ascending id order, and getting that from the data structure
//! beats re-sorting on every query. Ids are handed out sequentially and
//! never reused, even after a hard delete.

use std::collections::BTreeMap;

use chrono::Utc;

use super::{EventStore, StoreError};
use crate::types::{Event, EventDraft, EventFilter, EventId, EventPatch};

/// The in-process [`EventStore`] implementation backing tests and the CLI.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    events: BTreeMap<EventId, Event>,
    next_id: EventId,
}

impl MemoryStore {
    /// An empty store; the first created event gets id 1.
    pub fn new() -> Self {
        MemoryStore {
            events: BTreeMap::new(),
            next_id: EventId::FIRST,
        }
    }

    /// Seed a store from existing events (e.g. a JSON events file).
    ///
    /// Adopts the highest seen id, so later creates keep ids unique. Later
    /// duplicates of an id replace earlier ones.
    pub fn seeded(events: Vec<Event>) -> Self {
        let mut store = MemoryStore::new();
        for event in events {
            if event.id.next() > store.next_id {
                store.next_id = event.id.next();
            }
            store.events.insert(event.id, event);
        }
        store
    }

    /// Number of events held, archived included.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every event in id order, archived included. The CLI uses this to
    /// write the events file back out.
    pub fn dump(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    /// Live-name uniqueness check, optionally ignoring one id (so renaming
    /// an event to its current name stays a no-op).
    fn live_name_taken(&self, name: &str, exclude: Option<EventId>) -> bool {
        self.events
            .values()
            .any(|e| !e.is_archived() && e.name == name && Some(e.id) != exclude)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore for MemoryStore {
    fn create(&mut self, draft: EventDraft) -> Result<Event, StoreError> {
        if self.live_name_taken(&draft.name, None) {
            return Err(StoreError::NameTaken { name: draft.name });
        }

        let id = self.next_id;
        self.next_id = id.next();

        let event = Event {
            id,
            name: draft.name,
            category: draft.category,
            location: draft.location,
            created_at: Utc::now(),
            archived_at: None,
            tickets: draft.tickets,
            guests: draft.guests,
        };
        self.events.insert(id, event.clone());
        Ok(event)
    }

    fn find(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError> {
        // BTreeMap iteration is ascending by id already.
        Ok(self
            .events
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    fn get(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        Ok(self.events.get(&id).cloned())
    }

    fn update(&mut self, id: EventId, patch: EventPatch) -> Result<Option<Event>, StoreError> {
        let live = matches!(self.events.get(&id), Some(event) if !event.is_archived());
        if !live {
            return Ok(None);
        }

        if let Some(new_name) = patch.name.as_deref() {
            if self.live_name_taken(new_name, Some(id)) {
                return Err(StoreError::NameTaken {
                    name: new_name.to_string(),
                });
            }
        }

        let event = match self.events.get_mut(&id) {
            Some(event) => event,
            None => return Ok(None),
        };
        patch.apply_to(event);
        Ok(Some(event.clone()))
    }

    fn archive(&mut self, id: EventId) -> Result<bool, StoreError> {
        match self.events.get_mut(&id) {
            Some(event) if !event.is_archived() => {
                event.archived_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn restore(&mut self, id: EventId) -> Result<bool, StoreError> {
        let archived_name = match self.events.get(&id) {
            Some(event) if event.is_archived() => event.name.clone(),
            _ => return Ok(false),
        };
        if self.live_name_taken(&archived_name, Some(id)) {
            return Err(StoreError::NameTaken {
                name: archived_name,
            });
        }

        if let Some(event) = self.events.get_mut(&id) {
            event.archived_at = None;
        }
        Ok(true)
    }

    fn remove(&mut self, id: EventId) -> Result<bool, StoreError> {
        Ok(self.events.remove(&id).is_some())
    }
}
