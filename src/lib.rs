//! ncdu Export Diff Library
//!
//! This library reads disk-usage exports written by `ncdu -o`, rebuilds each
//! one as a tree with per-directory file counts and size totals, and aligns
//! two such trees by name so the differences between two scans can be
//! browsed one level at a time.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{
    Aggregation, DiffNode, DiffNodeCore, DiffSummary, DiffTree, Entry, FileEntry, NcduDocument,
    Presence, Report, ReportNode,
};
pub use services::diff::{diff_reports, diff_siblings};
pub use services::lookup::LookupError;
pub use services::parse::{FormatError, VersionMismatch, parse};

use std::collections::BTreeSet;
use std::path::Path;
use std::result;

use log::debug;

use crate::services::path::normalize_ignore_path;

/// Custom error type for the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: {source}")]
    Format {
        path: String,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = result::Result<T, Error>;

/// Options for parsing an export
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Normalized absolute paths whose entries (and subtrees) are dropped
    pub ignore_paths: BTreeSet<String>,
}

impl ParseOptions {
    /// Build options from raw paths, normalizing each one.
    pub fn with_ignore_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            ignore_paths: paths
                .into_iter()
                .map(|p| normalize_ignore_path(p.as_ref()))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignore_paths.contains(path)
    }
}

/// Read, parse and aggregate one export file.
pub fn load_report<P: AsRef<Path>>(path: P, opts: &ParseOptions) -> Result<Report> {
    let path = path.as_ref();
    let document = io::report_file::read_document(path, opts)?;
    debug!(
        "loaded {} ({} {}, format {}.{})",
        path.display(),
        document.metadata.progname,
        document.metadata.progver,
        document.major_version,
        document.minor_version
    );
    Ok(Report::from_document(path.display().to_string(), document))
}

/// Load two exports on separate threads.
///
/// If both fail, the left error is returned.
pub fn load_report_pair<L, R>(left: L, right: R, opts: &ParseOptions) -> Result<(Report, Report)>
where
    L: AsRef<Path> + Send,
    R: AsRef<Path> + Send,
{
    let (left, right) = rayon::join(|| load_report(left, opts), || load_report(right, opts));
    Ok((left?, right?))
}

/// Load two exports and diff them, `left` being the older scan.
pub fn diff_files<L, R>(left: L, right: R, opts: &ParseOptions) -> Result<DiffTree>
where
    L: AsRef<Path> + Send,
    R: AsRef<Path> + Send,
{
    let (left, right) = load_report_pair(left, right, opts)?;
    Ok(diff_reports(&left, &right))
}
