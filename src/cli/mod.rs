// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gala command-line interface.
//!
//! Every subcommand operates on an events JSON file (a plain array of event
//! objects). `add`, `edit`, `archive`, `restore`, and `remove` rewrite the
//! file after the change; `list`, `show`, and `search` only read it. The
//! `search` subcommand exposes the ranker's knobs: similarity metric,
//! threshold, and paging.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

use crate::scoring::Metric;

#[derive(Parser)]
#[command(
    name = "gala",
    about = "Fuzzy search and catalog for event listings",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an event and append it to the events file
    Add {
        /// Path to the events JSON file (created if absent)
        file: String,

        /// Event name (must not collide with a live event's name)
        #[arg(short, long)]
        name: String,

        /// Event category
        #[arg(short, long)]
        category: String,

        /// Event location
        #[arg(short, long)]
        location: String,
    },

    /// List events with exact-match filters and pagination
    List {
        /// Path to the events JSON file
        file: String,

        /// Only events in this category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Only events at this location (exact match)
        #[arg(long)]
        location: Option<String>,

        /// Include archived events
        #[arg(long)]
        archived: bool,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Events per page (0 = everything in one page)
        #[arg(long, default_value = "10")]
        page_size: usize,
    },

    /// Show one event with its tickets and guests
    Show {
        /// Path to the events JSON file
        file: String,

        /// Event id
        id: u64,
    },

    /// Edit an event in place (only the given fields change)
    Edit {
        /// Path to the events JSON file
        file: String,

        /// Event id
        id: u64,

        /// New name (must not collide with a live event's name)
        #[arg(short, long)]
        name: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New location
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Archive an event (hidden from default listings, restorable)
    Archive {
        /// Path to the events JSON file
        file: String,

        /// Event id
        id: u64,
    },

    /// Restore a previously archived event
    Restore {
        /// Path to the events JSON file
        file: String,

        /// Event id
        id: u64,
    },

    /// Permanently delete an event
    Remove {
        /// Path to the events JSON file
        file: String,

        /// Event id
        id: u64,
    },

    /// Fuzzy-search live events by name and rank by relevance
    Search {
        /// Path to the events JSON file
        file: String,

        /// Search query, matched against event names (case-insensitive)
        query: String,

        /// Only events in this category (exact match, applied before ranking)
        #[arg(long)]
        category: Option<String>,

        /// Only events at this location (exact match, applied before ranking)
        #[arg(long)]
        location: Option<String>,

        /// Relevance cutoff; only scores strictly above it survive
        #[arg(short, long, default_value = "70")]
        threshold: f64,

        /// Similarity metric used for scoring
        #[arg(short, long, value_enum, default_value = "jaro-winkler")]
        metric: MetricArg,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Results per page (0 = everything in one page)
        #[arg(long, default_value = "10")]
        page_size: usize,
    },
}

/// Similarity metric selector for `search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Jaro-Winkler similarity; rewards shared prefixes
    JaroWinkler,
    /// Normalized Levenshtein edit-distance ratio
    Levenshtein,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::JaroWinkler => Metric::JaroWinkler,
            MetricArg::Levenshtein => Metric::Levenshtein,
        }
    }
}
