//! # polaris-portfolio
//!
//! Parallel portfolio solving for Polaris.
//!
//! Races one DPLL searcher per heuristic configuration against the same
//! formula; the first decision wins and the rest are orphaned. Different
//! tunings explore the search tree in different orders, so the expected
//! latency of the race beats any fixed configuration across instances.

pub mod config;
pub mod driver;

pub use config::{builtin_configs, config_by_name};
pub use driver::{run_portfolio, Decision, PortfolioOutcome, DEFAULT_TIMEOUT};
