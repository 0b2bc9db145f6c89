//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use std::cell::RefCell;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::solver::{csp::VariableId, solution::Assignment, value::ValueEquality};

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which undecided variable the
/// solver should branch on next. A good heuristic can dramatically improve
/// solver performance.
pub trait VariableSelectionHeuristic<V: ValueEquality> {
    /// Selects the next variable to branch on.
    ///
    /// Returns `None` when every domain is already a singleton (or empty, in
    /// which case the branch is a dead end anyway).
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId>;
}

/// Selects the first undecided variable in registration order.
pub struct SelectFirstHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId> {
        assignment
            .iter()
            .find(|(_, domain)| domain.len() > 1)
            .map(|(id, _)| id)
    }
}

/// Selects the variable with the Minimum Remaining Values in its domain.
///
/// This is a "fail-first" strategy: the most constrained variable is tackled
/// early so that dead ends are discovered while the search tree is still
/// shallow. Ties are broken by registration order, which keeps the search
/// deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId> {
        assignment
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(id, domain)| (domain.len(), *id))
            .map(|(id, _)| id)
    }
}

/// Minimum Remaining Values with randomized tie-breaking.
///
/// Among the undecided variables with the smallest domain, one is picked at
/// random. The random source is a seeded [`ChaCha8Rng`] so that runs remain
/// reproducible: the same seed over the same problem selects the same
/// sequence of variables.
pub struct RandomizedMrvHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomizedMrvHeuristic {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl<V: ValueEquality> VariableSelectionHeuristic<V> for RandomizedMrvHeuristic {
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId> {
        let smallest = assignment
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .map(|(_, domain)| domain.len())
            .min()?;

        let candidates: Vec<VariableId> = assignment
            .iter()
            .filter(|(_, domain)| domain.len() == smallest)
            .map(|(id, _)| id)
            .collect();

        let pick = self.rng.borrow_mut().gen_range(0..candidates.len());
        Some(candidates[pick])
    }
}
