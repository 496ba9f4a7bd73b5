//! CLI argument parsing

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::ParseOptions;
use crate::services::rank::SortBy;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCommit: ",
    env!("GIT_HASH"),
    " (",
    env!("GIT_DATE"),
    ")\nTarget: ",
    env!("BUILD_TARGET"),
);

#[derive(Debug, Clone, Parser)]
#[command(
    name = "ncdiff",
    about = "Compare two ncdu exports and list what changed",
    version,
    long_version = LONG_VERSION,
    after_help = "EXAMPLES:\n    ncdiff before.json after.json\n    ncdiff before.json after.json --path /home/user --path Downloads --sort delta\n    ncdiff scans/ --ignore /home/user/.cache --json"
)]
pub struct CliArgs {
    /// Export files, or directories searched for *.json exports.
    /// The first and last file found are compared.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Leave this absolute path out of both scans (repeatable)
    #[arg(long = "ignore", value_name = "PATH")]
    pub ignore: Vec<String>,

    /// Descend into this entry before listing, one name per level (repeatable)
    #[arg(long = "path", value_name = "NAME")]
    pub path: Vec<String>,

    /// Sort by input|name|size|delta|files
    #[arg(long, default_value = "input")]
    pub sort: SortBy,

    /// Show at most this many entries
    #[arg(long, value_name = "K")]
    pub top: Option<usize>,

    /// Emit machine-readable output
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::with_ignore_paths(&self.ignore)
    }
}

/// Parse command line arguments (including the program name).
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}
