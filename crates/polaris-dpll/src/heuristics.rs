//! VSIDS branching heuristic.
//!
//! Keeps one activity score per (variable, polarity) pair. Decay is
//! realized by inflating the bump increment instead of multiplying every
//! score, which is equivalent up to the periodic rescale that keeps the
//! numbers finite.

use polaris_base::{var_of, Assignment, Error, Formula, Lit, Result};
use serde::{Deserialize, Serialize};

/// Tuning parameters for a [`Vsids`] instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VsidsConfig {
    /// Human-readable configuration name, reported by the portfolio.
    pub name: String,
    /// Starting value of the bump increment.
    pub initial_bump_inc: f64,
    /// Decay factor in (0, 1); the increment grows by its inverse.
    pub decay_factor: f64,
    /// Rescale when the increment exceeds this.
    pub rescale_threshold: f64,
    /// Divisor applied to all activities and the increment on rescale.
    pub rescale_factor: f64,
}

impl VsidsConfig {
    /// MiniSat-style tuning: unit bumps, 0.95 decay.
    pub fn minisat_classic() -> Self {
        Self {
            name: "minisat-classic".to_string(),
            initial_bump_inc: 1.0,
            decay_factor: 0.95,
            rescale_threshold: 1e100,
            rescale_factor: 1e100,
        }
    }

    /// Glucose-style tuning: fast decay, frequent rescales.
    pub fn glucose_aggressive() -> Self {
        Self {
            name: "glucose-aggressive".to_string(),
            initial_bump_inc: 1.5,
            decay_factor: 0.92,
            rescale_threshold: 1e50,
            rescale_factor: 1e50,
        }
    }

    /// Slow decay for long runs.
    pub fn stable_longterm() -> Self {
        Self {
            name: "stable-longterm".to_string(),
            initial_bump_inc: 0.5,
            decay_factor: 0.98,
            rescale_threshold: 1e200,
            rescale_factor: 1e100,
        }
    }

    /// Small bumps: initial occurrence counts dominate for a long time.
    pub fn init_heavy() -> Self {
        Self {
            name: "init-heavy".to_string(),
            initial_bump_inc: 0.1,
            decay_factor: 0.99,
            rescale_threshold: 1e300,
            rescale_factor: 1e100,
        }
    }
}

impl Default for VsidsConfig {
    fn default() -> Self {
        Self::minisat_classic()
    }
}

/// Per-literal activity scores with exponential decay.
#[derive(Debug, Clone)]
pub struct Vsids {
    /// Activity of the positive literal of each variable, 1-based.
    pos_activity: Vec<f64>,
    /// Activity of the negative literal of each variable, 1-based.
    neg_activity: Vec<f64>,
    /// Amount added by the next bump.
    bump_inc: f64,
    /// Inverse of the decay factor; multiplies `bump_inc` on decay.
    bump_factor: f64,
    rescale_threshold: f64,
    rescale_factor: f64,
}

impl Vsids {
    /// Creates a heuristic for `num_vars` variables with all scores zero.
    #[must_use]
    pub fn new(num_vars: usize, config: &VsidsConfig) -> Self {
        Self {
            pos_activity: vec![0.0; num_vars + 1],
            neg_activity: vec![0.0; num_vars + 1],
            bump_inc: config.initial_bump_inc,
            bump_factor: 1.0 / config.decay_factor,
            rescale_threshold: config.rescale_threshold,
            rescale_factor: config.rescale_factor,
        }
    }

    /// Seeds activities from occurrence counts: each literal occurrence
    /// adds 1.0 to its polarity slot.
    pub fn init(&mut self, formula: &Formula) {
        for clause in formula {
            for &lit in clause {
                if lit > 0 {
                    self.pos_activity[lit as usize] += 1.0;
                } else {
                    self.neg_activity[var_of(lit)] += 1.0;
                }
            }
        }
    }

    /// Inflates the bump increment, rescaling if it crossed the threshold.
    pub fn decay(&mut self) {
        self.bump_inc *= self.bump_factor;
        if self.bump_inc > self.rescale_threshold {
            self.rescale();
        }
    }

    /// Divides all activities and the increment by the rescale factor.
    /// Relative ordering of the scores is unchanged.
    fn rescale(&mut self) {
        for var in 1..self.pos_activity.len() {
            self.pos_activity[var] /= self.rescale_factor;
            self.neg_activity[var] /= self.rescale_factor;
        }
        self.bump_inc /= self.rescale_factor;
        tracing::debug!(bump_inc = self.bump_inc, "rescaled activities");
    }

    /// Adds the current increment to the polarity slot matching `lit`.
    pub fn bump(&mut self, lit: Lit) {
        if lit > 0 {
            self.pos_activity[lit as usize] += self.bump_inc;
        } else {
            self.neg_activity[var_of(lit)] += self.bump_inc;
        }
    }

    /// Returns the activity of a literal.
    #[must_use]
    pub fn activity(&self, lit: Lit) -> f64 {
        if lit > 0 {
            self.pos_activity[lit as usize]
        } else {
            self.neg_activity[var_of(lit)]
        }
    }

    /// Picks the unassigned literal with the highest activity.
    ///
    /// Scans variables in ascending order and switches only on a strictly
    /// greater score, so ties resolve to the lowest variable index with
    /// positive polarity before negative.
    pub fn select_literal(&self, assignment: &Assignment) -> Result<Lit> {
        let mut max_score = -1.0;
        let mut best: Lit = 0;
        for var in 1..=assignment.num_vars() {
            if assignment.is_assigned(var) {
                continue;
            }
            if self.pos_activity[var] > max_score {
                max_score = self.pos_activity[var];
                best = var as Lit;
            }
            if self.neg_activity[var] > max_score {
                max_score = self.neg_activity[var];
                best = -(var as Lit);
            }
        }
        if best == 0 {
            return Err(Error::NoFreeVariable);
        }
        Ok(best)
    }
}
