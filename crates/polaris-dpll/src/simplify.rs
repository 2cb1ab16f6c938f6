//! Formula simplification: unit propagation and pure-literal elimination.
//!
//! Both passes build new formula snapshots rather than mutating in place;
//! the caller's original snapshot stays valid for the second branch.

use crate::solver::SearchStats;
use polaris_base::{var_of, Assignment, Clause, Formula, Lit};
use std::collections::HashSet;

/// Applies a forced literal to a formula snapshot: drops every clause
/// containing `lit` (now satisfied) and deletes every occurrence of
/// `-lit` (falsified) from the rest.
pub(crate) fn reduce(formula: &Formula, lit: Lit) -> Formula {
    formula
        .iter()
        .filter(|clause| !clause.contains(&lit))
        .map(|clause| {
            clause
                .iter()
                .copied()
                .filter(|&l| l != -lit)
                .collect::<Clause>()
        })
        .collect()
}

/// Runs unit propagation to a fixed point.
///
/// Each round collects the unit clauses of the current snapshot, assigns
/// their literals, and reduces the formula by each in turn. Terminates
/// because every reduction strictly shrinks the clause count or the
/// total literal count.
pub fn unit_propagate(
    mut formula: Formula,
    assignment: &mut Assignment,
    stats: &mut SearchStats,
) -> Formula {
    loop {
        let units: Vec<Lit> = formula
            .iter()
            .filter(|clause| clause.len() == 1)
            .map(|clause| clause[0])
            .collect();
        if units.is_empty() {
            break;
        }
        for lit in units {
            assignment.assign(var_of(lit), lit > 0);
            stats.propagations += 1;
            formula = reduce(&formula, lit);
        }
    }
    formula
}

/// Runs one pure-literal pass over the current snapshot.
///
/// A literal is pure iff its negation does not appear in the formula.
/// Every pure literal is assigned to hold and the clauses containing it
/// are dropped. Pure literals are processed in ascending order so runs
/// are reproducible.
pub fn pure_literal_assignment(
    mut formula: Formula,
    assignment: &mut Assignment,
    stats: &mut SearchStats,
) -> Formula {
    let all: HashSet<Lit> = formula.iter().flatten().copied().collect();
    let mut pure: Vec<Lit> = all
        .iter()
        .copied()
        .filter(|lit| !all.contains(&-lit))
        .collect();
    pure.sort_unstable();

    for lit in pure {
        assignment.assign(var_of(lit), lit > 0);
        stats.pure_eliminations += 1;
        formula.retain(|clause| !clause.contains(&lit));
    }
    formula
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_units(formula: Formula, nvars: usize) -> (Formula, Assignment) {
        let mut assignment = Assignment::new(nvars);
        let mut stats = SearchStats::default();
        let formula = unit_propagate(formula, &mut assignment, &mut stats);
        (formula, assignment)
    }

    #[test]
    fn test_reduce_drops_and_strips() {
        let formula = vec![vec![1, 2], vec![-1, 3], vec![2, 3]];
        assert_eq!(reduce(&formula, 1), vec![vec![3], vec![2, 3]]);
    }

    #[test]
    fn test_unit_propagation_chains() {
        // 1 forces -2 forces 3.
        let formula = vec![vec![1], vec![-1, -2], vec![2, 3]];
        let (formula, assignment) = run_units(formula, 3);

        assert!(formula.is_empty());
        assert!(assignment.evaluate(1));
        assert!(assignment.evaluate(-2));
        assert!(assignment.evaluate(3));
    }

    #[test]
    fn test_unit_propagation_conflict_leaves_empty_clause() {
        let formula = vec![vec![1], vec![-1]];
        let (formula, _) = run_units(formula, 1);
        assert!(polaris_base::has_empty_clause(&formula));
    }

    #[test]
    fn test_unit_propagation_fixed_point_is_order_independent() {
        // Two independent unit chains; the fixed point is the same
        // whichever unit is picked first within a round.
        let a = vec![vec![1], vec![2], vec![-1, 3], vec![-2, 4]];
        let mut b = a.clone();
        b.swap(0, 1);

        let (fa, _) = run_units(a, 4);
        let (fb, _) = run_units(b, 4);
        assert!(fa.is_empty());
        assert!(fb.is_empty());
    }

    #[test]
    fn test_pure_literal_elimination() {
        // 1 appears only positively, 3 only negatively; 2 is mixed.
        let formula = vec![vec![1, 2], vec![1, -2], vec![-3, 2]];
        let mut assignment = Assignment::new(3);
        let mut stats = SearchStats::default();
        let formula = pure_literal_assignment(formula, &mut assignment, &mut stats);

        assert!(formula.is_empty());
        assert!(assignment.evaluate(1));
        assert!(assignment.evaluate(-3));
        assert!(!assignment.is_assigned(2));
        assert_eq!(stats.pure_eliminations, 2);
    }

    #[test]
    fn test_pure_literal_pass_keeps_mixed_clauses() {
        let formula = vec![vec![1, -2], vec![-1, 2]];
        let mut assignment = Assignment::new(2);
        let mut stats = SearchStats::default();
        let formula = pure_literal_assignment(formula, &mut assignment, &mut stats);

        assert_eq!(formula.len(), 2);
        assert!(!assignment.is_assigned(1));
        assert!(!assignment.is_assigned(2));
    }
}
