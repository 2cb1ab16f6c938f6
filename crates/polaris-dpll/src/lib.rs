//! # polaris-dpll
//!
//! The DPLL search core of Polaris.
//!
//! Implements:
//! - Unit propagation and pure-literal elimination
//! - VSIDS activity scoring with decay and rescaling
//! - Recursive branching search with branch-local assignment state

pub mod heuristics;
pub mod simplify;
pub mod solver;

pub use heuristics::{Vsids, VsidsConfig};
pub use solver::{DpllSolver, SearchStats};
