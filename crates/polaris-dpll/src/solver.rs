//! Recursive DPLL search.

use crate::heuristics::{Vsids, VsidsConfig};
use crate::simplify::{pure_literal_assignment, reduce, unit_propagate};
use polaris_base::{formula_satisfied, has_empty_clause, var_of, Assignment, Formula};

/// Search statistics.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Number of branching decisions made.
    pub decisions: u64,
    /// Number of unit-clause assignments.
    pub propagations: u64,
    /// Number of pure-literal assignments.
    pub pure_eliminations: u64,
    /// Number of failed branches.
    pub backtracks: u64,
}

/// A single DPLL searcher: one heuristic, one statistics block.
///
/// The searcher is strictly sequential; the portfolio runs one per
/// thread. Assignment state is cloned per branch, so each recursive
/// frame owns its state and siblings never observe each other's
/// mutations. The heuristic is shared across both branches of every
/// frame and accumulates bumps from failed subtrees.
pub struct DpllSolver {
    vsids: Vsids,
    stats: SearchStats,
    num_vars: usize,
}

impl DpllSolver {
    /// Creates a searcher with zeroed activities.
    #[must_use]
    pub fn new(num_vars: usize, config: &VsidsConfig) -> Self {
        Self {
            vsids: Vsids::new(num_vars, config),
            stats: SearchStats::default(),
            num_vars,
        }
    }

    /// Seeds the heuristic from formula occurrence counts.
    pub fn init_activity(&mut self, formula: &Formula) {
        self.vsids.init(formula);
    }

    /// Decides satisfiability of `formula`, starting from an empty
    /// assignment. Returns the decision and the final assignment state.
    pub fn solve(&mut self, formula: &Formula) -> (bool, Assignment) {
        self.solve_from(formula, Assignment::new(self.num_vars))
    }

    /// Decides satisfiability starting from an existing assignment state.
    ///
    /// The formula snapshot must already reflect the starting
    /// assignment: simplification works on clause shape alone, so a
    /// satisfied clause or falsified literal left in the snapshot would
    /// be re-derived. The formula is never mutated; every simplified
    /// snapshot is a fresh value.
    pub fn solve_from(&mut self, formula: &Formula, assignment: Assignment) -> (bool, Assignment) {
        let (sat, state) = self.search(formula.clone(), assignment);
        tracing::info!(
            sat,
            decisions = self.stats.decisions,
            propagations = self.stats.propagations,
            pure_eliminations = self.stats.pure_eliminations,
            backtracks = self.stats.backtracks,
            "search finished"
        );
        (sat, state)
    }

    /// Returns the statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn search(&mut self, formula: Formula, mut assignment: Assignment) -> (bool, Assignment) {
        // Base cases, in order: truth, conflict, satisfaction.
        if formula.is_empty() {
            return (true, assignment);
        }
        if has_empty_clause(&formula) {
            return (false, assignment);
        }
        if formula_satisfied(&formula, &assignment) {
            return (true, assignment);
        }

        let formula = unit_propagate(formula, &mut assignment, &mut self.stats);
        let formula = pure_literal_assignment(formula, &mut assignment, &mut self.stats);

        if formula_satisfied(&formula, &assignment) {
            return (true, assignment);
        }
        if has_empty_clause(&formula) {
            return (false, assignment);
        }

        self.vsids.decay();
        // NoFreeVariable cannot happen while simplification is correct:
        // every remaining clause holds an unassigned literal. Treated as
        // UNSAT for robustness.
        let Ok(lit) = self.vsids.select_literal(&assignment) else {
            return (false, assignment);
        };
        self.stats.decisions += 1;
        tracing::trace!(lit, "branching");

        // First branch: force the literal with its native polarity.
        let mut first = assignment.clone();
        first.assign(var_of(lit), lit > 0);
        let (sat, state) = self.search(reduce(&formula, lit), first);
        if sat {
            return (true, state);
        }

        // Credit the opposite polarity for the failure.
        self.vsids.bump(-lit);
        self.stats.backtracks += 1;

        // Second branch, from the pre-branch state: force the literal false.
        let mut second = assignment.clone();
        second.assign(var_of(lit), lit < 0);
        let (sat, state) = self.search(reduce(&formula, -lit), second);
        if !sat {
            // Both branches failed; blame the decision literal itself.
            self.vsids.bump(lit);
            self.stats.backtracks += 1;
        }
        (sat, state)
    }
}
