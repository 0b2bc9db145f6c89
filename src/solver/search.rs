use tracing::debug;

use crate::solver::{
    csp::Csp,
    heuristics::{
        value::{IdentityValueOrdering, ValueOrderingHeuristic},
        variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
    },
    propagate::{enforce_arc_consistency, Propagation},
    solution::{Assignment, Solution},
    stats::SearchStats,
    value::ValueEquality,
};

/// How a search ended.
#[derive(Debug, Clone)]
pub enum SearchOutcome<V: ValueEquality> {
    /// A complete, consistent assignment was found.
    Solved(Solution<V>),
    /// Every branch was exhausted without finding a solution.
    Unsatisfiable,
    /// The configured node budget ran out before the search could decide
    /// either way.
    BudgetExhausted,
}

impl<V: ValueEquality> SearchOutcome<V> {
    pub fn into_solution(self) -> Option<Solution<V>> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, SearchOutcome::Unsatisfiable)
    }

    pub fn is_budget_exhausted(&self) -> bool {
        matches!(self, SearchOutcome::BudgetExhausted)
    }
}

enum Step<V: ValueEquality> {
    Found(Assignment<V>),
    Exhausted,
    OverBudget,
}

/// Depth-first search with arc consistency maintained at every decision
/// point.
///
/// Each node picks an undecided variable, and for each of its remaining
/// values branches into a clone of the assignment with that variable fixed,
/// runs AC-3 seeded with the full arc set, and recurses if propagation holds
/// up. The first complete assignment found is returned; a branch whose every
/// value fails is abandoned, which is the backtrack.
///
/// Variable selection and value ordering are pluggable; the default pairs
/// minimum-remaining-values with registration-order values.
pub struct BacktrackingSearch<V: ValueEquality> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    node_budget: Option<u64>,
}

impl<V: ValueEquality> BacktrackingSearch<V> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            node_budget: None,
        }
    }

    /// Caps the number of recursive calls. When the cap is hit the search
    /// stops with [`SearchOutcome::BudgetExhausted`] instead of an answer.
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    /// Runs the search and returns the outcome together with the accumulated
    /// statistics.
    ///
    /// The initial assignment copies every registered domain, then a root
    /// AC-3 pass over the full arc set weeds out values that are inconsistent
    /// before any branching. Root-level inconsistency is an ordinary
    /// [`SearchOutcome::Unsatisfiable`], not an error.
    pub fn solve(&self, csp: &Csp<V>) -> (SearchOutcome<V>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut root = csp.initial_assignment();

        if root.has_empty_domain() {
            return (SearchOutcome::Unsatisfiable, stats);
        }

        if let Propagation::Inconsistent =
            enforce_arc_consistency(csp, &mut root, csp.arc_ids(), &mut stats)
        {
            debug!("inconsistent before any branching");
            return (SearchOutcome::Unsatisfiable, stats);
        }

        match self.search(csp, root, &mut stats) {
            Step::Found(assignment) => {
                let solution = Solution::from_assignment(csp, &assignment);
                (SearchOutcome::Solved(solution), stats)
            }
            Step::Exhausted => (SearchOutcome::Unsatisfiable, stats),
            Step::OverBudget => (SearchOutcome::BudgetExhausted, stats),
        }
    }

    fn search(&self, csp: &Csp<V>, assignment: Assignment<V>, stats: &mut SearchStats) -> Step<V> {
        stats.nodes_visited += 1;
        if let Some(budget) = self.node_budget {
            if stats.nodes_visited > budget {
                debug!(budget, "node budget exhausted");
                return Step::OverBudget;
            }
        }

        if assignment.is_complete() {
            return Step::Found(assignment);
        }

        let Some(var) = self.variable_heuristic.select_variable(&assignment) else {
            // Not complete, yet nothing is left to branch on: some domain
            // must be empty.
            return Step::Exhausted;
        };

        for value in self.value_heuristic.order_values(assignment.domain(var)) {
            // Every branch works on its own clone; a failed branch leaves no
            // trace in its siblings.
            let mut branch = assignment.clone();
            branch.fix(var, value);

            if let Propagation::Consistent =
                enforce_arc_consistency(csp, &mut branch, csp.arc_ids(), stats)
            {
                match self.search(csp, branch, stats) {
                    Step::Found(solved) => return Step::Found(solved),
                    Step::OverBudget => return Step::OverBudget,
                    Step::Exhausted => {}
                }
            }
        }

        stats.backtracks += 1;
        Step::Exhausted
    }
}

impl<V: ValueEquality> Default for BacktrackingSearch<V> {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(IdentityValueOrdering),
        )
    }
}
