//! Reading exports from disk

pub mod report_file;
