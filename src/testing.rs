//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders so tests and benches agree on what
//! a plain test event looks like.

#![doc(hidden)]

use chrono::{TimeZone, Utc};

use crate::store::MemoryStore;
use crate::types::{Event, EventId, Guest, Ticket};

/// Create a live test event with default category and location.
///
/// The creation stamp is fixed so fixtures compare stably.
pub fn make_event(id: u64, name: &str) -> Event {
    make_event_in(id, name, "music", "berlin")
}

/// Create a live test event with explicit category and location.
pub fn make_event_in(id: u64, name: &str, category: &str, location: &str) -> Event {
    Event {
        id: EventId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        archived_at: None,
        tickets: Vec::new(),
        guests: Vec::new(),
    }
}

/// Create an archived test event.
pub fn make_archived_event(id: u64, name: &str) -> Event {
    let mut event = make_event(id, name);
    event.archived_at = Some(Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap());
    event
}

/// Create a test ticket tier.
pub fn make_ticket(tier: &str, price_cents: u32, quantity: u32) -> Ticket {
    Ticket {
        tier: tier.to_string(),
        price_cents,
        quantity,
    }
}

/// Create a test guest without an email.
pub fn make_guest(name: &str) -> Guest {
    Guest {
        name: name.to_string(),
        email: None,
    }
}

/// The canonical mixed fixture set: three categories, two cities, one
/// archived entry (id 6).
pub fn sample_events() -> Vec<Event> {
    vec![
        make_event_in(1, "Jazz Night", "music", "berlin"),
        make_event_in(2, "Jazz Fest", "music", "paris"),
        make_event_in(3, "Rock Show", "music", "berlin"),
        make_event_in(4, "Art Expo", "art", "paris"),
        make_event_in(5, "Food Fair", "food", "berlin"),
        make_archived_event(6, "Silent Disco"),
    ]
}

/// A store pre-seeded with [`sample_events`].
pub fn sample_store() -> MemoryStore {
    MemoryStore::seeded(sample_events())
}
