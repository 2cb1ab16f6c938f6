//! # polaris-format
//!
//! File format parsing and serialization for Polaris.
//!
//! Supports:
//! - **DIMACS CNF**: the standard SAT competition input format

pub mod dimacs;

pub use dimacs::{parse_path, parse_reader, parse_str, CnfFormula};
