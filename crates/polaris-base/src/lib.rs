//! # polaris-base
//!
//! Core types and utilities for the Polaris SAT solver.
//!
//! This crate provides the foundational building blocks used across all other
//! Polaris crates, including:
//!
//! - **CNF Model**: literals, clauses, formulas
//! - **Assignment**: the three-valued per-variable assignment state
//! - **Error Types**: unified error handling across the solver

pub mod assignment;
pub mod error;
pub mod types;

pub use assignment::{clause_satisfied, formula_satisfied, has_empty_clause, Assignment, VarValue};
pub use error::{Error, Result};
pub use types::{var_of, Clause, Formula, Lit, Var};
