//! Core services: parsing, aggregation, diffing, and lookup

pub mod aggregate;
pub mod diff;
pub mod format;
pub mod lookup;
pub mod parse;
pub mod path;
pub mod rank;
