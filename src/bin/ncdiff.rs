//! ncdu export diff (ncdiff) - Main binary entry point

use clap::Parser;
use log::info;
use ncdiff::cli::args::CliArgs;
use ncdiff::cli::output::{format_json, format_text};
use ncdiff::io::report_file::{find_report_files, first_and_last};
use ncdiff::services::rank::sort_and_limit;
use std::io::IsTerminal;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug ncdiff before.json after.json
    env_logger::init();

    let args = CliArgs::parse();
    process::exit(run(&args));
}

fn run(args: &CliArgs) -> i32 {
    let files = match find_report_files(&args.inputs) {
        Ok(files) => files,
        Err(e) => return fail(&e),
    };
    let (left, right) = match first_and_last(&files) {
        Ok(pair) => pair,
        Err(e) => return fail(&e),
    };
    info!("diffing {} against {}", left.display(), right.display());

    let tree = match ncdiff::diff_files(left, right, &args.parse_options()) {
        Ok(tree) => tree,
        Err(e) => return fail(&e),
    };

    let entries = match tree.cores_at(&args.path) {
        Ok(entries) => entries,
        Err(e) => return fail(&ncdiff::Error::from(e)),
    };
    let entries = sort_and_limit(entries, args.sort, args.top);

    if args.json {
        println!("{}", format_json(&tree, &args.path, &entries));
    } else {
        let color = std::io::stdout().is_terminal();
        print!("{}", format_text(&tree, &args.path, &entries, color));
    }

    0
}

fn fail(e: &ncdiff::Error) -> i32 {
    eprintln!("Error: {e}");
    match e {
        ncdiff::Error::InvalidInput(_) | ncdiff::Error::Lookup(_) => 2,
        ncdiff::Error::Io(_) | ncdiff::Error::Format { .. } => 4,
    }
}
