// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core domain types for the gala event catalog.
//!
//! Everything that crosses a boundary lives here: the event record and its
//! related entities (tickets, guests), the write-side inputs ([`EventDraft`],
//! [`EventPatch`]), the read-side filter ([`EventFilter`]), and the paging
//! envelope ([`Page`], [`PageRequest`]).
//!
//! # Serialization
//!
//! All types serialize with serde using camelCase field names, matching the
//! JSON event files the CLI reads and writes.
//!
//! # Paging semantics
//!
//! Paging is offset/limit over an already-ordered sequence:
//! `offset = (page - 1) * page_size`, clamped to the sequence length. A page
//! past the end is an empty page, not an error. `page < 1` is treated as 1,
//! and `page_size == 0` means "everything in one page". The returned [`Page`]
//! always carries the effective (clamped) values, so it is self-describing.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default page size when a caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe event identifier.
///
/// Prevents mixing up ids with counts or offsets. Ids are assigned by the
/// store, sequentially from 1, and are never reused within a store's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct EventId(pub u64);

impl EventId {
    /// First id a store hands out.
    pub const FIRST: EventId = EventId(1);

    #[inline]
    pub const fn new(raw: u64) -> Self {
        EventId(raw)
    }

    /// Get the underlying value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, used by stores when assigning.
    #[inline]
    pub const fn next(self) -> Self {
        EventId(self.0 + 1)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(raw: u64) -> Self {
        EventId(raw)
    }
}

impl From<EventId> for u64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

// =============================================================================
// EVENTS AND RELATED ENTITIES
// =============================================================================

/// A ticket tier attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Tier label, e.g. "general" or "vip".
    pub tier: String,
    /// Price in minor currency units (cents), so ticket math stays exact.
    pub price_cents: u32,
    /// Number of tickets available in this tier.
    pub quantity: u32,
}

/// A guest on an event's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A single event in the catalog.
///
/// An event is **live** while `archived_at` is `None`; soft-archival stamps
/// the field instead of deleting the record, so archived events stay
/// retrievable and restorable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    /// Display name; the field fuzzy search matches against.
    pub name: String,
    pub category: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    /// Soft-archival stamp. `None` means the event is live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tickets: Vec<Ticket>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guests: Vec<Guest>,
}

impl Event {
    /// Whether this event has been soft-archived.
    #[inline]
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

// =============================================================================
// WRITE-SIDE INPUTS
// =============================================================================

/// Input for creating a new event. The store assigns the id and the creation
/// stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub guests: Vec<Guest>,
}

impl EventDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        EventDraft {
            name: name.into(),
            category: category.into(),
            location: location.into(),
            tickets: Vec::new(),
            guests: Vec::new(),
        }
    }

    pub fn with_tickets(mut self, tickets: Vec<Ticket>) -> Self {
        self.tickets = tickets;
        self
    }

    pub fn with_guests(mut self, guests: Vec<Guest>) -> Self {
        self.guests = guests;
        self
    }
}

/// Partial update for an event: an enumerated set of updatable fields, each
/// individually optional, so the type system knows exactly what an update
/// can touch.
///
/// Present fields replace the stored value; `tickets`/`guests` replace the
/// whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<Ticket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<Vec<Guest>>,
}

impl EventPatch {
    /// A patch that changes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.location.is_none()
            && self.tickets.is_none()
            && self.guests.is_none()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_tickets(mut self, tickets: Vec<Ticket>) -> Self {
        self.tickets = Some(tickets);
        self
    }

    pub fn with_guests(mut self, guests: Vec<Guest>) -> Self {
        self.guests = Some(guests);
        self
    }

    /// Apply to an event in place. Present fields replace existing values;
    /// absent fields leave the event untouched.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(name) = self.name {
            event.name = name;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(tickets) = self.tickets {
            event.tickets = tickets;
        }
        if let Some(guests) = self.guests {
            event.guests = guests;
        }
    }
}

// =============================================================================
// READ-SIDE FILTER
// =============================================================================

/// Exact-match structural filter for store queries.
///
/// Fuzzy matching never happens here: the store narrows by exact
/// category/location equality and the ranker handles textual relevance on
/// what remains. Archived events are excluded unless `include_archived`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub include_archived: bool,
}

impl EventFilter {
    /// Matches every live event.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_archived(mut self) -> Self {
        self.include_archived = true;
        self
    }

    /// Whether `event` satisfies this filter.
    pub fn matches(&self, event: &Event) -> bool {
        if !self.include_archived && event.is_archived() {
            return false;
        }
        if let Some(category) = &self.category {
            if category != &event.category {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if location != &event.location {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// PAGING
// =============================================================================

/// Paging parameters: 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub const fn new(page: usize, page_size: usize) -> Self {
        PageRequest { page, page_size }
    }

    /// Effective 1-based page number after clamping (`page < 1` becomes 1).
    #[inline]
    pub fn effective_page(self) -> usize {
        self.page.max(1)
    }

    /// Effective page size given `available` items (`0` means all of them).
    #[inline]
    pub fn effective_size(self, available: usize) -> usize {
        if self.page_size == 0 {
            available
        } else {
            self.page_size
        }
    }

    /// Start offset into the ordered result sequence.
    #[inline]
    pub fn offset(self, available: usize) -> usize {
        (self.effective_page() - 1).saturating_mul(self.effective_size(available))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the metadata callers need to page further.
///
/// `total` counts all matching items after filtering, across every page, so
/// callers can compute page counts without a second query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// This page's items, in result order.
    pub data: Vec<T>,
    /// Total matching items after filtering, across all pages.
    pub total: usize,
    /// Effective 1-based page number.
    pub page: usize,
    /// Effective page size used to slice this page.
    pub limit: usize,
}

impl<T> Page<T> {
    /// Build a page by slicing an ordered sequence according to `req`.
    ///
    /// Clamping rules are the module-level ones; an offset past the end
    /// yields an empty `data`, never an error.
    pub fn slice(items: Vec<T>, req: PageRequest) -> Page<T> {
        let total = items.len();
        let page = req.effective_page();
        let limit = req.effective_size(total);
        let offset = req.offset(total);
        let data: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
        Page {
            data,
            total,
            page,
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Map this page's items, keeping the paging metadata intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
