//! Data models for ncdu entries, aggregated reports, and diff trees

pub mod diff;
pub mod entry;
pub mod report;

pub use diff::{DiffNode, DiffNodeCore, DiffSide, DiffSummary, DiffTree, Presence};
pub use entry::{DirEntry, Entry, EntryKind, FileEntry, NcduDocument, NcduMetadata};
pub use report::{Aggregation, Report, ReportNode};
