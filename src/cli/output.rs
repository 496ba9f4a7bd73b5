//! Output formatting for CLI

use crate::models::{Aggregation, DiffNodeCore, DiffTree, Presence};
use crate::services::format::{format_delta, format_size};

/// Reset ANSI color
const COLOR_RESET: &str = "\x1b[0m";

/// Marker and ANSI color for a presence class
fn presence_style(presence: Presence) -> (char, &'static str) {
    match presence {
        Presence::RightOnly => ('+', "\x1b[32m"), // Green for added
        Presence::LeftOnly => ('-', "\x1b[31m"),  // Red for removed
        Presence::Both => (' ', ""),
    }
}

fn side_size(aggr: Option<Aggregation>) -> String {
    aggr.map_or_else(|| "-".to_string(), |a| format_size(a.dsize))
}

/// Render a listing as a human-readable table
#[must_use]
pub fn format_text(
    tree: &DiffTree,
    path: &[String],
    entries: &[DiffNodeCore],
    color: bool,
) -> String {
    let summary = tree.summary();
    let location = if path.is_empty() {
        "<roots>".to_string()
    } else {
        path.join(" > ")
    };

    let mut out = format!(
        "{} -> {}\n{location} ({} added, {} removed, {} common)\n\n",
        tree.left_path, tree.right_path, summary.added, summary.removed, summary.common
    );

    if entries.is_empty() {
        out.push_str("No entries found.\n");
        return out;
    }

    out.push_str(&format!(
        "  {:<48} {:>10} {:>10} {:>11} {:>8}\n",
        "Name", "Left", "Right", "Delta", "Files"
    ));
    out.push_str(&"─".repeat(93));
    out.push('\n');

    for entry in entries {
        let (marker, paint) = presence_style(entry.presence);
        let name = if entry.is_dir {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        let (start, end) = if color && !paint.is_empty() {
            (paint, COLOR_RESET)
        } else {
            ("", "")
        };

        out.push_str(&format!(
            "{start}{marker} {name:<48}{end} {:>10} {:>10} {:>11} {:>8}\n",
            side_size(entry.aggr0),
            side_size(entry.aggr1),
            format_delta(entry.dsize_delta()),
            entry.files()
        ));
    }

    out
}

/// Format a listing as JSON
#[must_use]
pub fn format_json(tree: &DiffTree, path: &[String], entries: &[DiffNodeCore]) -> String {
    let output = serde_json::json!({
        "left": tree.left_path,
        "right": tree.right_path,
        "path": path,
        "summary": tree.summary(),
        "entries": entries,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
