// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the gala CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `GALA_THEME` first
//! (for explicit control), then `COLORFGBG` (set by some terminals), then macOS
//! system appearance, then defaults to dark because most developers live there.
//!
//! Box drawing, archived badges, score coloring - the little touches that make
//! CLI output feel polished. Respects `NO_COLOR` for the purists and non-TTY
//! detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `GALA_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use crate::catalog::SearchHit;
use crate::scoring::Metric;
use crate::types::{Event, Page};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via GALA_THEME
    if let Ok(theme) = std::env::var("GALA_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    // Set by some terminals like xterm, rxvt
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                // Colors 0-6 are typically dark, 7+ are light
                // 15 = white, 0 = black
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    // 4. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191);   // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_RED: (u8, u8, u8) = (240, 113, 120);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
    pub const BRIGHT_BLUE: (u8, u8, u8) = (127, 200, 255);
    pub const BRIGHT_MAGENTA: (u8, u8, u8) = (224, 145, 237); // #e091ed
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66);      // #383a42 (foreground)
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_RED: (u8, u8, u8) = (202, 18, 67);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
    pub const BRIGHT_BLUE: (u8, u8, u8) = (54, 100, 212);
    pub const BRIGHT_MAGENTA: (u8, u8, u8) = (146, 38, 144); // #922690
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);
theme_color!(BRIGHT_RED);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_YELLOW);
theme_color!(BRIGHT_BLUE);
theme_color!(BRIGHT_MAGENTA);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Truncate display text to `max` characters, ellipsis at the end.
///
/// Works in characters, not bytes, so multibyte names never split mid-char.
pub fn truncate_text(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH - visible_len(&label_part);
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH - visible_len(&label_part);
    println!(
        "{}├{}{}{}─{}┤{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining - 1),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

/// Print double-line header: ╔══════════════════╗
pub fn double_header() {
    let border = BLUE();
    println!("{}╔{}╗{}", border, "═".repeat(BOX_WIDTH), RESET);
}

/// Print double-line footer: ╚══════════════════╝
pub fn double_footer() {
    let border = BLUE();
    println!("{}╚{}╝{}", border, "═".repeat(BOX_WIDTH), RESET);
}

/// Print centered title with bold
pub fn title(text: &str) {
    let border = BLUE();
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let len = visible_len(&colored);
    let total_pad = BOX_WIDTH.saturating_sub(len);
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        RESET,
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        border,
        RESET
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded similarity score. Everything shown already beat the threshold,
/// so the scale only distinguishes "exact" from "close" from "marginal".
pub fn score_value(score: f64) -> String {
    if !use_colors() {
        return format!("{:>7.1}", score);
    }
    let color = if score >= 95.0 {
        BRIGHT_GREEN()
    } else if score >= 85.0 {
        GREEN()
    } else if score >= 75.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{:>7.1}{}", color, score, RESET)
}

/// Badge appended to archived events
pub fn archived_badge() -> String {
    themed(YELLOW, &[], "[archived]")
}

/// Format a minor-unit price as "12.50"
pub fn format_price(cents: u32) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

/// Render one page of a listing as a table.
pub fn event_list(listing: &Page<Event>) {
    println!();
    section_top("EVENTS");
    row("");
    if listing.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "(no events match)")));
    } else {
        row(&format!(
            "  {:>4}  {:<36}  {:<14}  {:<18}",
            "ID", "NAME", "CATEGORY", "LOCATION"
        ));
        row(&format!(
            "  {}  {}  {}  {}",
            "─".repeat(4),
            "─".repeat(36),
            "─".repeat(14),
            "─".repeat(18)
        ));
        for event in &listing.data {
            row(&event_line(event));
        }
    }
    row("");
    section_mid("PAGE");
    row(&format!(
        "  page {} │ limit {} │ showing {} of {}",
        listing.page,
        listing.limit,
        listing.len(),
        listing.total
    ));
    section_bot();
    println!();
}

fn event_line(event: &Event) -> String {
    let name = if event.is_archived() {
        format!(
            "{} {}",
            truncate_text(&event.name, 25),
            archived_badge()
        )
    } else {
        truncate_text(&event.name, 36)
    };
    format!(
        "  {}  {}  {}  {}",
        pad_left(&themed(BLUE, &[BOLD], &event.id.to_string()), 4),
        pad_right(&name, 36),
        pad_right(&truncate_text(&event.category, 14), 14),
        pad_right(&truncate_text(&event.location, 18), 18),
    )
}

/// Render one event in full: fields, tickets, guests.
pub fn event_detail(event: &Event) {
    println!();
    double_header();
    title(&event.name);
    double_footer();

    section_top("DETAILS");
    row(&format!(
        "  Id:        {}",
        themed(BLUE, &[BOLD], &event.id.to_string())
    ));
    row(&format!(
        "  Category:  {}",
        themed(MAGENTA, &[], &event.category)
    ));
    row(&format!(
        "  Location:  {}",
        themed(CYAN, &[], &event.location)
    ));
    row(&format!(
        "  Created:   {}",
        event.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    match event.archived_at {
        Some(at) => row(&format!(
            "  Status:    {} since {}",
            archived_badge(),
            at.format("%Y-%m-%d")
        )),
        None => row(&format!("  Status:    {}", themed(GREEN, &[], "live"))),
    }

    if !event.tickets.is_empty() {
        section_mid(&format!("TICKETS ({})", event.tickets.len()));
        for ticket in &event.tickets {
            row(&format!(
                "  {}  {} × {}",
                pad_right(&truncate_text(&ticket.tier, 16), 16),
                pad_left(&format_price(ticket.price_cents), 9),
                ticket.quantity
            ));
        }
    }

    if !event.guests.is_empty() {
        section_mid(&format!("GUESTS ({})", event.guests.len()));
        for guest in &event.guests {
            match &guest.email {
                Some(email) => row(&format!(
                    "  {} {}",
                    guest.name,
                    themed(GRAY, &[], &format!("<{}>", email))
                )),
                None => row(&format!("  {}", guest.name)),
            }
        }
    }

    section_bot();
    println!();
}

/// Render ranked search results with their scores.
pub fn search_results(query: &str, metric: Metric, threshold: f64, hits: &Page<SearchHit>) {
    println!();
    section_top(&format!("SEARCH \"{}\"", truncate_text(query, 40)));
    row(&format!(
        "  metric {} │ threshold {}",
        themed(MAGENTA, &[], metric.as_str()),
        themed(YELLOW, &[], &format!("{}", threshold))
    ));
    section_mid("RESULTS");
    row("");
    if hits.is_empty() {
        row(&format!(
            "  {}",
            themed(GRAY, &[], "(no matches above threshold)")
        ));
    } else {
        row(&format!(
            "  {:>7}  {:>4}  {:<34}  {:<12}  {:<12}",
            "SCORE", "ID", "NAME", "CATEGORY", "LOCATION"
        ));
        for hit in &hits.data {
            row(&format!(
                "  {}  {}  {}  {}  {}",
                score_value(hit.score),
                pad_left(&themed(BLUE, &[BOLD], &hit.event.id.to_string()), 4),
                pad_right(&truncate_text(&hit.event.name, 34), 34),
                pad_right(&truncate_text(&hit.event.category, 12), 12),
                pad_right(&truncate_text(&hit.event.location, 12), 12),
            ));
        }
    }
    row("");
    section_mid("PAGE");
    row(&format!(
        "  page {} │ limit {} │ {} of {} match{}",
        hits.page,
        hits.limit,
        hits.len(),
        hits.total,
        if hits.total == 1 { "" } else { "es" }
    ));
    section_bot();
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
