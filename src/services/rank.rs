//! Ordering of a sibling listing for display

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::models::DiffNodeCore;

/// Sort key for a listing of diff nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Keep diff order
    #[default]
    Input,
    Name,
    /// Larger disk size of either side, descending
    Size,
    /// Absolute disk-size change, descending
    Delta,
    Files,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "name" => Ok(Self::Name),
            "size" => Ok(Self::Size),
            "delta" => Ok(Self::Delta),
            "files" => Ok(Self::Files),
            other => Err(format!(
                "Invalid sort: {other}. Use input, name, size, delta or files"
            )),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Input => "input",
            Self::Name => "name",
            Self::Size => "size",
            Self::Delta => "delta",
            Self::Files => "files",
        };
        f.write_str(label)
    }
}

/// Sort and limit entries to top K. Sorting is stable, so ties keep diff order.
#[must_use]
pub fn sort_and_limit(
    mut entries: Vec<DiffNodeCore>,
    sort_by: SortBy,
    top_k: Option<usize>,
) -> Vec<DiffNodeCore> {
    match sort_by {
        SortBy::Input => {}
        SortBy::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        SortBy::Size => entries.sort_by_key(|e| Reverse(e.dsize())),
        SortBy::Delta => entries.sort_by_key(|e| Reverse(e.dsize_delta().unsigned_abs())),
        SortBy::Files => entries.sort_by_key(|e| Reverse(e.files())),
    }

    if let Some(k) = top_k {
        entries.truncate(k);
    }

    entries
}
