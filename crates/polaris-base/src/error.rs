//! Unified error types for Polaris.

use thiserror::Error;

/// The main error type for Polaris operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed DIMACS input.
    #[error("parse error at line {line}: {msg}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What went wrong.
        msg: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No unassigned variable remains to branch on.
    ///
    /// Internal signal from literal selection; the search consumes it
    /// locally and translates it to UNSAT, it never reaches callers.
    #[error("no free variable to branch on")]
    NoFreeVariable,

    /// A solver configuration name did not match any known configuration.
    #[error("unknown solver configuration: {0}")]
    UnknownConfig(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
