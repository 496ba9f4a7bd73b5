//! Merged diff trees produced by aligning two reports by name

use serde::{Deserialize, Serialize};

use super::entry::{EntryKind, FileEntry};
use super::report::{Aggregation, ReportNode};
use crate::services::lookup::{LookupError, children_at};

/// One report's view of a diff node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSide {
    pub entry: FileEntry,
    pub kind: EntryKind,
    pub aggregation: Aggregation,
}

impl From<&ReportNode> for DiffSide {
    fn from(node: &ReportNode) -> Self {
        Self {
            entry: node.entry.clone(),
            kind: node.kind,
            aggregation: node.aggregation,
        }
    }
}

/// Which of the two reports contain a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Only in the left (older) report: removed
    LeftOnly,
    /// Only in the right (newer) report: added
    RightOnly,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sides {
    Left(DiffSide),
    Right(DiffSide),
    Both(DiffSide, DiffSide),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffNode {
    sides: Sides,
    depth: u32,
    children: Vec<DiffNode>,
}

impl DiffNode {
    /// Node present only in the left report.
    #[must_use]
    pub fn left_only(side: DiffSide, depth: u32, children: Vec<DiffNode>) -> Self {
        Self {
            sides: Sides::Left(side),
            depth,
            children,
        }
    }

    /// Node present only in the right report.
    #[must_use]
    pub fn right_only(side: DiffSide, depth: u32, children: Vec<DiffNode>) -> Self {
        Self {
            sides: Sides::Right(side),
            depth,
            children,
        }
    }

    /// Node matched by name in both reports.
    #[must_use]
    pub fn both(left: DiffSide, right: DiffSide, depth: u32, children: Vec<DiffNode>) -> Self {
        Self {
            sides: Sides::Both(left, right),
            depth,
            children,
        }
    }

    #[must_use]
    pub fn left(&self) -> Option<&DiffSide> {
        match &self.sides {
            Sides::Left(side) | Sides::Both(side, _) => Some(side),
            Sides::Right(_) => None,
        }
    }

    #[must_use]
    pub fn right(&self) -> Option<&DiffSide> {
        match &self.sides {
            Sides::Right(side) | Sides::Both(_, side) => Some(side),
            Sides::Left(_) => None,
        }
    }

    /// The left entry's name if present, else the right one's.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.primary().entry.name
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn children(&self) -> &[DiffNode] {
        &self.children
    }

    #[must_use]
    pub fn presence(&self) -> Presence {
        match self.sides {
            Sides::Left(_) => Presence::LeftOnly,
            Sides::Right(_) => Presence::RightOnly,
            Sides::Both(..) => Presence::Both,
        }
    }

    #[must_use]
    pub fn is_added(&self) -> bool {
        self.presence() == Presence::RightOnly
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.presence() == Presence::LeftOnly
    }

    /// A node counts as a directory if either side is one.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.left().is_some_and(|s| s.kind == EntryKind::Dir)
            || self.right().is_some_and(|s| s.kind == EntryKind::Dir)
    }

    /// Right aggregated apparent size minus left; a missing side counts as 0.
    #[must_use]
    pub fn asize_delta(&self) -> i128 {
        self.delta(|a| a.asize)
    }

    /// Right aggregated disk size minus left; a missing side counts as 0.
    #[must_use]
    pub fn dsize_delta(&self) -> i128 {
        self.delta(|a| a.dsize)
    }

    /// Flat record of this node without its subtree.
    #[must_use]
    pub fn core(&self) -> DiffNodeCore {
        let left = self.left();
        let right = self.right();
        DiffNodeCore {
            name: self.name().to_string(),
            is_dir: self.is_dir(),
            presence: self.presence(),
            level: self.depth,
            entry0: left.map(|s| s.entry.clone()),
            entry1: right.map(|s| s.entry.clone()),
            aggr0: left.map(|s| s.aggregation),
            aggr1: right.map(|s| s.aggregation),
            children: self.children.len(),
        }
    }

    fn primary(&self) -> &DiffSide {
        match &self.sides {
            Sides::Left(side) | Sides::Right(side) | Sides::Both(side, _) => side,
        }
    }

    fn delta(&self, pick: impl Fn(&Aggregation) -> u64) -> i128 {
        let left = self.left().map_or(0, |s| i128::from(pick(&s.aggregation)));
        let right = self.right().map_or(0, |s| i128::from(pick(&s.aggregation)));
        right - left
    }
}

/// What crosses the presentation boundary: one node, no nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffNodeCore {
    pub name: String,
    pub is_dir: bool,
    pub presence: Presence,
    pub level: u32,
    pub entry0: Option<FileEntry>,
    pub entry1: Option<FileEntry>,
    pub aggr0: Option<Aggregation>,
    pub aggr1: Option<Aggregation>,
    /// Number of immediate children in the diff tree
    pub children: usize,
}

impl DiffNodeCore {
    #[must_use]
    pub fn dsize_delta(&self) -> i128 {
        let left = self.aggr0.map_or(0, |a| i128::from(a.dsize));
        let right = self.aggr1.map_or(0, |a| i128::from(a.dsize));
        right - left
    }

    /// Largest aggregated disk size of either side.
    #[must_use]
    pub fn dsize(&self) -> u64 {
        let left = self.aggr0.map_or(0, |a| a.dsize);
        let right = self.aggr1.map_or(0, |a| a.dsize);
        left.max(right)
    }

    #[must_use]
    pub fn files(&self) -> u64 {
        let left = self.aggr0.map_or(0, |a| a.files);
        let right = self.aggr1.map_or(0, |a| a.files);
        left.max(right)
    }
}

/// Node counts by presence over a whole diff tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: u64,
    pub removed: u64,
    pub common: u64,
}

impl DiffSummary {
    /// `true` when no node exists on one side only.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Result of diffing two reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTree {
    pub left_path: String,
    pub right_path: String,
    pub roots: Vec<DiffNode>,
}

impl DiffTree {
    /// Immediate children at `path`; an empty path yields the roots.
    pub fn children_at<S: AsRef<str>>(&self, path: &[S]) -> Result<&[DiffNode], LookupError> {
        children_at(&self.roots, path)
    }

    /// Like [`DiffTree::children_at`], flattened to presentation records.
    pub fn cores_at<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<DiffNodeCore>, LookupError> {
        Ok(self.children_at(path)?.iter().map(DiffNode::core).collect())
    }

    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        let mut stack: Vec<&DiffNode> = self.roots.iter().collect();
        while let Some(node) = stack.pop() {
            match node.presence() {
                Presence::LeftOnly => summary.removed += 1,
                Presence::RightOnly => summary.added += 1,
                Presence::Both => summary.common += 1,
            }
            stack.extend(node.children());
        }
        summary
    }
}
