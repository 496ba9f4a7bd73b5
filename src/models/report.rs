//! Aggregated report trees built from parsed entries

use serde::{Deserialize, Serialize};

use super::entry::{EntryKind, FileEntry, NcduDocument};
use crate::services::aggregate::build;

/// Bottom-up rollup attached to every report node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Number of immediate children
    pub children: u64,
    /// Descendant files and directories, the node itself excluded
    pub files: u64,
    /// Descendant directories
    pub dirs: u64,
    /// Apparent size including the node's own
    pub asize: u64,
    /// Disk size including the node's own
    pub dsize: u64,
}

/// One entry of a report tree. Children are owned by their parent and keep input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportNode {
    pub entry: FileEntry,
    pub kind: EntryKind,
    pub depth: u32,
    pub aggregation: Aggregation,
    pub children: Vec<ReportNode>,
}

impl ReportNode {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The aggregated tree of one document, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: String,
    pub roots: Vec<ReportNode>,
}

impl Report {
    /// Aggregate a parsed document into a report with a single root.
    #[must_use]
    pub fn from_document(path: impl Into<String>, document: NcduDocument) -> Self {
        Self {
            path: path.into(),
            roots: vec![build(document.root, 0)],
        }
    }
}
