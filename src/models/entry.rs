//! Typed entries decoded from an ncdu JSON export
//!
//! See <https://dev.yorhel.nl/ncdu/jsonfmt> for the upstream format.

use serde::{Deserialize, Serialize};

use crate::services::parse::VersionMismatch;

/// Leaf descriptor: a plain file, or the head of a directory.
///
/// Every field except `name` is optional in the input and defaults to
/// zero/false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub asize: u64,
    #[serde(default)]
    pub dsize: u64,
    /// Device id. Zero in the input means "same as the enclosing directory";
    /// the parser resolves it before the entry is handed out.
    #[serde(default)]
    pub dev: u64,
    #[serde(default)]
    pub ino: u64,
    #[serde(default)]
    pub notreg: bool,
    #[serde(default)]
    pub hlnkc: bool,
    #[serde(default)]
    pub read_error: bool,
}

impl FileEntry {
    /// Create an entry with the given name and sizes, all other fields zeroed.
    #[must_use]
    pub fn new(name: impl Into<String>, asize: u64, dsize: u64) -> Self {
        Self {
            name: name.into(),
            asize,
            dsize,
            dev: 0,
            ino: 0,
            notreg: false,
            hlnkc: false,
            read_error: false,
        }
    }
}

/// A directory: its own descriptor plus children in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub head: FileEntry,
    pub children: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(FileEntry),
    Dir(DirEntry),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

impl Entry {
    /// The leaf descriptor of this entry (the head, for a directory).
    #[must_use]
    pub fn file(&self) -> &FileEntry {
        match self {
            Entry::File(file) => file,
            Entry::Dir(dir) => &dir.head,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.file().name
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File(_) => EntryKind::File,
            Entry::Dir(_) => EntryKind::Dir,
        }
    }

    /// Child entries; always empty for a file.
    #[must_use]
    pub fn children(&self) -> &[Entry] {
        match self {
            Entry::File(_) => &[],
            Entry::Dir(dir) => &dir.children,
        }
    }
}

/// The third element of the top-level array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NcduMetadata {
    #[serde(default)]
    pub progname: String,
    #[serde(default)]
    pub progver: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// A fully decoded export: version, metadata and the root entry.
#[derive(Debug, Clone)]
pub struct NcduDocument {
    pub major_version: u64,
    pub minor_version: u64,
    pub metadata: NcduMetadata,
    pub root: Entry,
    /// Set when the document declares a format version other than the supported one.
    pub version_warning: Option<VersionMismatch>,
}
