//! First-result-wins portfolio driver.

use polaris_base::{Assignment, Formula};
use polaris_dpll::{DpllSolver, VsidsConfig};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default deadline for a portfolio run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a solve: a proper decision, or the deadline expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Satisfiable, with a model.
    Sat,
    /// Unsatisfiable.
    Unsat,
    /// No worker answered before the deadline.
    Timeout,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Sat => write!(f, "SAT"),
            Decision::Unsat => write!(f, "UNSAT"),
            Decision::Timeout => write!(f, "TIMEOUT"),
        }
    }
}

/// What the portfolio returns to the caller.
#[derive(Debug)]
pub struct PortfolioOutcome {
    /// The decision.
    pub decision: Decision,
    /// Final assignment of the winning searcher; `None` on timeout.
    pub assignment: Option<Assignment>,
    /// Name of the winning configuration; empty on timeout.
    pub config_name: String,
}

struct WorkerResult {
    sat: bool,
    state: Assignment,
    config_name: String,
}

/// Races one searcher per configuration and returns the first decision.
///
/// Workers share the formula read-only; each owns its heuristic, its
/// assignment, and every snapshot it derives. The result channel is
/// buffered to the worker count, so orphaned workers never block on
/// their final send; they are left to finish on their own and their
/// late results are discarded with the channel.
pub fn run_portfolio(
    num_vars: usize,
    formula: &Formula,
    configs: &[VsidsConfig],
    timeout: Duration,
) -> PortfolioOutcome {
    let formula = Arc::new(formula.clone());
    let (tx, rx) = mpsc::sync_channel::<WorkerResult>(configs.len().max(1));

    for config in configs.iter().cloned() {
        let formula = Arc::clone(&formula);
        let tx = tx.clone();
        thread::Builder::new()
            .name(format!("polaris-{}", config.name))
            .spawn(move || {
                tracing::debug!(config = %config.name, "worker started");
                let mut solver = DpllSolver::new(num_vars, &config);
                solver.init_activity(&formula);
                let (sat, state) = solver.solve(&formula);
                let _ = tx.send(WorkerResult {
                    sat,
                    state,
                    config_name: config.name,
                });
            })
            .expect("failed to spawn portfolio worker");
    }
    // The receiver must not count the driver's own handle as a live sender.
    drop(tx);

    match rx.recv_timeout(timeout) {
        Ok(result) => {
            tracing::info!(winner = %result.config_name, sat = result.sat, "portfolio decided");
            PortfolioOutcome {
                decision: if result.sat {
                    Decision::Sat
                } else {
                    Decision::Unsat
                },
                assignment: Some(result.state),
                config_name: result.config_name,
            }
        }
        Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
            tracing::warn!(?timeout, "portfolio timed out");
            PortfolioOutcome {
                decision: Decision::Timeout,
                assignment: None,
                config_name: String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_configs;
    use polaris_base::formula_satisfied;

    /// Pigeonhole principle: `pigeons` into `pigeons - 1` holes, UNSAT
    /// and exponentially hard for plain DPLL.
    fn pigeonhole(pigeons: usize) -> (usize, Formula) {
        let holes = pigeons - 1;
        let var = |i: usize, j: usize| (i * holes + j + 1) as i32;
        let mut clauses: Formula = Vec::new();
        for i in 0..pigeons {
            clauses.push((0..holes).map(|j| var(i, j)).collect());
        }
        for j in 0..holes {
            for a in 0..pigeons {
                for b in (a + 1)..pigeons {
                    clauses.push(vec![-var(a, j), -var(b, j)]);
                }
            }
        }
        (pigeons * holes, clauses)
    }

    #[test]
    fn test_portfolio_sat() {
        let formula: Formula = vec![vec![1, 2], vec![-1, 3], vec![-2, -3]];
        let outcome = run_portfolio(3, &formula, &builtin_configs(), DEFAULT_TIMEOUT);

        assert_eq!(outcome.decision, Decision::Sat);
        let model = outcome.assignment.expect("SAT carries a model");
        assert!(formula_satisfied(&formula, &model));
        assert!(builtin_configs()
            .iter()
            .any(|c| c.name == outcome.config_name));
    }

    #[test]
    fn test_portfolio_unsat() {
        let formula: Formula = vec![vec![1], vec![-1]];
        let outcome = run_portfolio(1, &formula, &builtin_configs(), DEFAULT_TIMEOUT);

        assert_eq!(outcome.decision, Decision::Unsat);
        assert!(outcome.assignment.is_some());
    }

    #[test]
    fn test_portfolio_agrees_with_single_config() {
        let formula: Formula = vec![vec![1, 2], vec![-2, 3], vec![-2, -3], vec![-1, 2]];
        let mut solver = DpllSolver::new(3, &VsidsConfig::minisat_classic());
        solver.init_activity(&formula);
        let (single_sat, _) = solver.solve(&formula);

        let outcome = run_portfolio(3, &formula, &builtin_configs(), DEFAULT_TIMEOUT);
        let portfolio_sat = outcome.decision == Decision::Sat;
        assert_eq!(portfolio_sat, single_sat);
    }

    #[test]
    fn test_portfolio_timeout_returns_promptly() {
        let (num_vars, formula) = pigeonhole(7);
        let deadline = Duration::from_millis(20);

        let started = std::time::Instant::now();
        let outcome = run_portfolio(num_vars, &formula, &builtin_configs(), deadline);
        let elapsed = started.elapsed();

        assert_eq!(outcome.decision, Decision::Timeout);
        assert!(outcome.assignment.is_none());
        assert!(outcome.config_name.is_empty());
        // Driver returns within the deadline plus scheduling slack.
        assert!(elapsed < deadline + Duration::from_secs(2));
    }

    #[test]
    fn test_empty_portfolio_times_out() {
        let formula: Formula = vec![vec![1]];
        let outcome = run_portfolio(1, &formula, &[], Duration::from_millis(10));
        assert_eq!(outcome.decision, Decision::Timeout);
    }
}
