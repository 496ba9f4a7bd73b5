//! Parser for ncdu JSON exports
//!
//! The document is a 4-element array `[major, minor, metadata, root]` where
//! `root` is a group: an object is a file, an array is a directory whose
//! first element describes the directory itself and the rest are its
//! children. Device ids and cumulative paths are threaded down the walk so
//! inheritance and exclusion are decided top-down.

use std::fmt;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::ParseOptions;
use crate::models::{DirEntry, Entry, FileEntry, NcduDocument, NcduMetadata};
use crate::services::path::join;

/// Remaining stack below which recursive walks switch to a fresh segment.
pub(crate) const RED_ZONE: usize = 64 * 1024;
/// Size of each extra stack segment.
pub(crate) const STACK_GROWTH: usize = 1024 * 1024;

/// The only format version this parser is written against.
pub const SUPPORTED_VERSION: (u64, u64) = (1, 1);

/// A structural violation of the export grammar. Always fatal for the document.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected 4-element array at top level, got {found} element(s)")]
    TopLevelArity { found: usize },

    #[error("expected {expected} at {path}, got {found}")]
    UnexpectedValue {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid fields under {path}: {source}")]
    InvalidField {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected file descriptor as directory head under {path}")]
    ExpectedDirectoryHead { path: String },

    #[error("directory without head under {path}")]
    EmptyDirectory { path: String },

    #[error("root entry {path} is excluded")]
    RootExcluded { path: String },
}

/// The document declares a version other than [`SUPPORTED_VERSION`].
///
/// Only ever logged; parsing continues as if the grammar were unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMismatch {
    pub major: u64,
    pub minor: u64,
}

impl fmt::Display for VersionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor) = SUPPORTED_VERSION;
        write!(
            f,
            "expected format version {major}.{minor}, got {}.{}",
            self.major, self.minor
        )
    }
}

/// Decode a whole export held in memory.
pub fn parse(bytes: &[u8], options: &ParseOptions) -> Result<NcduDocument, FormatError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(unexpected("document", "array", &other)),
    };
    let [major, minor, metadata, root] = items.as_slice() else {
        return Err(FormatError::TopLevelArity { found: items.len() });
    };

    let major_version = version_component(major, "$[0]")?;
    let minor_version = version_component(minor, "$[1]")?;
    let version_warning = if (major_version, minor_version) == SUPPORTED_VERSION {
        None
    } else {
        let mismatch = VersionMismatch {
            major: major_version,
            minor: minor_version,
        };
        warn!("{mismatch}");
        Some(mismatch)
    };

    if !metadata.is_object() {
        return Err(unexpected("$[2]", "metadata object", metadata));
    }
    let metadata = NcduMetadata::deserialize(metadata).map_err(|source| {
        FormatError::InvalidField {
            path: "$[2]".to_string(),
            source,
        }
    })?;

    let root = parse_group(root, 0, "", options)?.ok_or_else(|| FormatError::RootExcluded {
        path: group_name(root).unwrap_or_default().to_string(),
    })?;

    Ok(NcduDocument {
        major_version,
        minor_version,
        metadata,
        root,
        version_warning,
    })
}

/// Parse one group below `parent`. `Ok(None)` means the group is excluded
/// and must be left out of its parent.
fn parse_group(
    value: &Value,
    dev: u64,
    parent: &str,
    options: &ParseOptions,
) -> Result<Option<Entry>, FormatError> {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || match value {
        Value::Object(_) => Ok(parse_leaf(value, dev, parent, options)?.map(Entry::File)),
        Value::Array(items) => parse_dir(items, dev, parent, options),
        other => Err(unexpected(context(parent), "object or array", other)),
    })
}

fn parse_dir(
    items: &[Value],
    dev: u64,
    parent: &str,
    options: &ParseOptions,
) -> Result<Option<Entry>, FormatError> {
    let Some((head, rest)) = items.split_first() else {
        return Err(FormatError::EmptyDirectory {
            path: context(parent),
        });
    };
    if !head.is_object() {
        return Err(FormatError::ExpectedDirectoryHead {
            path: context(parent),
        });
    }
    let Some(head) = parse_leaf(head, dev, parent, options)? else {
        return Ok(None);
    };

    let path = join(parent, &head.name);
    let mut children = Vec::with_capacity(rest.len());
    for item in rest {
        if let Some(child) = parse_group(item, head.dev, &path, options)? {
            children.push(child);
        }
    }
    Ok(Some(Entry::Dir(DirEntry { head, children })))
}

fn parse_leaf(
    value: &Value,
    dev: u64,
    parent: &str,
    options: &ParseOptions,
) -> Result<Option<FileEntry>, FormatError> {
    let mut file = FileEntry::deserialize(value).map_err(|source| FormatError::InvalidField {
        path: context(parent),
        source,
    })?;
    if file.dev == 0 {
        file.dev = dev;
    }

    let path = join(parent, &file.name);
    if options.is_ignored(&path) {
        debug!("excluding {path}");
        return Ok(None);
    }
    Ok(Some(file))
}

fn version_component(value: &Value, path: &str) -> Result<u64, FormatError> {
    value
        .as_u64()
        .ok_or_else(|| unexpected(path, "version number", value))
}

/// Name of a group, looking through a directory to its head.
fn group_name(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => map.get("name").and_then(Value::as_str),
        Value::Array(items) => items.first().and_then(group_name),
        _ => None,
    }
}

fn context(parent: &str) -> String {
    if parent.is_empty() {
        "<root>".to_string()
    } else {
        parent.to_string()
    }
}

fn unexpected(path: impl Into<String>, expected: &'static str, found: &Value) -> FormatError {
    FormatError::UnexpectedValue {
        path: path.into(),
        expected,
        found: json_type(found),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
