// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command implementations for the gala CLI.
//!
//! Each command loads the events file into an in-memory catalog, runs the
//! operation, and (for mutating commands) writes the whole file back. The
//! file format is a plain JSON array of events: it diffs cleanly and
//! survives hand edits. Nothing derived is stored; ranking happens fresh on
//! every search.
//!
//! Human-readable output goes through [`display`]; confirmations and
//! warnings go to stderr so stdout stays pipeable.

use std::fs;
use std::path::Path;

use crate::catalog::EventCatalog;
use crate::scoring::Metric;
use crate::search::RankOptions;
use crate::store::MemoryStore;
use crate::types::{Event, EventDraft, EventFilter, EventId, EventPatch, PageRequest};

use super::display;
use super::{Cli, Commands};

/// Dispatch a parsed CLI invocation to its command.
pub fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Add {
            file,
            name,
            category,
            location,
        } => run_add(&file, &name, &category, &location),
        Commands::List {
            file,
            category,
            location,
            archived,
            page,
            page_size,
        } => run_list(
            &file,
            filter_from(category, location, archived),
            PageRequest::new(page, page_size),
        ),
        Commands::Show { file, id } => run_show(&file, id),
        Commands::Edit {
            file,
            id,
            name,
            category,
            location,
        } => run_edit(&file, id, name, category, location),
        Commands::Archive { file, id } => run_archive(&file, id),
        Commands::Restore { file, id } => run_restore(&file, id),
        Commands::Remove { file, id } => run_remove(&file, id),
        Commands::Search {
            file,
            query,
            category,
            location,
            threshold,
            metric,
            page,
            page_size,
        } => run_search(
            &file,
            &query,
            metric.into(),
            filter_from(category, location, false),
            RankOptions::default()
                .with_threshold(threshold)
                .on_page(page, page_size),
        ),
    }
}

fn filter_from(category: Option<String>, location: Option<String>, archived: bool) -> EventFilter {
    let mut filter = EventFilter::all();
    if let Some(category) = category {
        filter = filter.with_category(category);
    }
    if let Some(location) = location {
        filter = filter.with_location(location);
    }
    if archived {
        filter = filter.with_archived();
    }
    filter
}

// =============================================================================
// EVENTS FILE I/O
// =============================================================================

/// Read and parse the events file.
fn load_events(path: &str) -> Result<Vec<Event>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid events JSON in {}: {}", path, e))
}

/// Like [`load_events`], but a missing file means an empty catalog. Only
/// `add` uses this; every other command treats a missing file as an error.
fn load_events_or_default(path: &str) -> Result<Vec<Event>, String> {
    if Path::new(path).exists() {
        load_events(path)
    } else {
        Ok(Vec::new())
    }
}

/// Write every event (archived included) back to the file, pretty-printed.
fn save_events(path: &str, catalog: &EventCatalog<MemoryStore>) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&catalog.store().dump())
        .map_err(|e| format!("Failed to serialize events: {}", e))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))
}

// =============================================================================
// COMMANDS
// =============================================================================

/// `gala add`: create an event, creating the events file if needed.
pub fn run_add(file: &str, name: &str, category: &str, location: &str) -> Result<(), String> {
    let mut catalog = EventCatalog::new(MemoryStore::seeded(load_events_or_default(file)?));

    let event = catalog
        .create(EventDraft::new(name, category, location))
        .map_err(|e| e.to_string())?;
    save_events(file, &catalog)?;

    eprintln!("✅ Added '{}' (id {})", event.name, event.id);
    Ok(())
}

/// `gala list`: filtered, paginated listing.
pub fn run_list(file: &str, filter: EventFilter, paging: PageRequest) -> Result<(), String> {
    let catalog = EventCatalog::new(MemoryStore::seeded(load_events(file)?));

    let listing = catalog.list(&filter, paging).map_err(|e| e.to_string())?;
    display::event_list(&listing);
    Ok(())
}

/// `gala show`: one event with its tickets and guests.
pub fn run_show(file: &str, id: u64) -> Result<(), String> {
    let catalog = EventCatalog::new(MemoryStore::seeded(load_events(file)?));

    match catalog.get(EventId::new(id)).map_err(|e| e.to_string())? {
        Some(event) => {
            display::event_detail(&event);
            Ok(())
        }
        None => Err(format!("No event with id {}", id)),
    }
}

/// `gala edit`: patch the given fields of a live event.
pub fn run_edit(
    file: &str,
    id: u64,
    name: Option<String>,
    category: Option<String>,
    location: Option<String>,
) -> Result<(), String> {
    let patch = EventPatch {
        name,
        category,
        location,
        tickets: None,
        guests: None,
    };
    if patch.is_empty() {
        return Err("Nothing to change; pass at least one of --name, --category, --location".into());
    }

    let mut catalog = EventCatalog::new(MemoryStore::seeded(load_events(file)?));
    match catalog
        .update(EventId::new(id), patch)
        .map_err(|e| e.to_string())?
    {
        Some(event) => {
            save_events(file, &catalog)?;
            eprintln!("✅ Updated event {}", event.id);
            display::event_detail(&event);
            Ok(())
        }
        None => Err(format!(
            "No live event with id {} (archived events cannot be edited)",
            id
        )),
    }
}

/// `gala archive`: soft-archive a live event.
pub fn run_archive(file: &str, id: u64) -> Result<(), String> {
    let mut catalog = EventCatalog::new(MemoryStore::seeded(load_events(file)?));

    if catalog.archive(EventId::new(id)).map_err(|e| e.to_string())? {
        save_events(file, &catalog)?;
        eprintln!("✅ Archived event {}", id);
        Ok(())
    } else {
        Err(format!("No live event with id {}", id))
    }
}

/// `gala restore`: bring an archived event back.
pub fn run_restore(file: &str, id: u64) -> Result<(), String> {
    let mut catalog = EventCatalog::new(MemoryStore::seeded(load_events(file)?));

    if catalog.restore(EventId::new(id)).map_err(|e| e.to_string())? {
        save_events(file, &catalog)?;
        eprintln!("✅ Restored event {}", id);
        Ok(())
    } else {
        Err(format!("No archived event with id {}", id))
    }
}

/// `gala remove`: hard-delete an event, archived or not.
pub fn run_remove(file: &str, id: u64) -> Result<(), String> {
    let mut catalog = EventCatalog::new(MemoryStore::seeded(load_events(file)?));

    if catalog.remove(EventId::new(id)).map_err(|e| e.to_string())? {
        save_events(file, &catalog)?;
        eprintln!("✅ Removed event {}", id);
        Ok(())
    } else {
        Err(format!("No event with id {}", id))
    }
}

/// `gala search`: ranked fuzzy search over live events.
pub fn run_search(
    file: &str,
    query: &str,
    metric: Metric,
    filter: EventFilter,
    opts: RankOptions,
) -> Result<(), String> {
    if !(0.0..=100.0).contains(&opts.threshold) {
        eprintln!("⚠️  Threshold {} is outside [0, 100]", opts.threshold);
    }

    let catalog = EventCatalog::with_metric(MemoryStore::seeded(load_events(file)?), metric);

    let threshold = opts.threshold;
    let hits = catalog
        .search(query, &filter, opts)
        .map_err(|e| e.to_string())?;
    display::search_results(query, metric, threshold, &hits);
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
