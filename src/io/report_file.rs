//! Export file discovery and loading
//!
//! Inputs may name export files directly or directories that hold them;
//! directories are searched recursively for `*.json` files.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::models::NcduDocument;
use crate::services::parse::parse;
use crate::{Error, ParseOptions, Result};

/// Read one export from disk and parse it.
pub fn read_document<P: AsRef<Path>>(path: P, opts: &ParseOptions) -> Result<NcduDocument> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    parse(&bytes, opts).map_err(|source| Error::Format {
        path: path.display().to_string(),
        source,
    })
}

/// Resolve inputs into a list of export files, in input order.
///
/// Symlinks are resolved first. Files inside a directory are listed in
/// file-name order so repeated runs pick the same files.
pub fn find_report_files<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let resolved = fs::canonicalize(input.as_ref())?;
        if resolved.is_dir() {
            collect_from_dir(&resolved, &mut files)?;
        } else {
            files.push(resolved);
        }
    }
    Ok(files)
}

fn collect_from_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let is_json = entry.path().extension().is_some_and(|ext| ext == "json");
        if entry.file_type().is_file() && is_json {
            debug!("found export {}", entry.path().display());
            files.push(entry.into_path());
        }
    }
    Ok(())
}

/// The oldest and newest of the discovered exports: first and last in order.
pub fn first_and_last(files: &[PathBuf]) -> Result<(&Path, &Path)> {
    match files {
        [first, .., last] => Ok((first.as_path(), last.as_path())),
        _ => Err(Error::InvalidInput(format!(
            "expected at least 2 export files, found {}",
            files.len()
        ))),
    }
}
