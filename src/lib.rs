//! Necto is a generic, reusable constraint satisfaction problem (CSP) solver.
//!
//! The engine is problem-agnostic: you register named variables with finite
//! domains, declare binary constraints between pairs of them, and ask for one
//! satisfying assignment. Internally the solver interleaves AC-3 constraint
//! propagation with depth-first backtracking search ("maintaining arc
//! consistency").
//!
//! # Core Concepts
//!
//! - **[`Csp`]**: the problem under construction, holding variables, their
//!   candidate value sets, and the directed constraint graph. Every declared
//!   constraint is materialized as two arcs, each carrying the set of value
//!   pairs it allows.
//! - **[`BacktrackingSearch`]**: the search driver. Variable selection and
//!   value ordering are pluggable through the [`heuristics`] traits.
//! - **[`SearchOutcome`]**: how a search ends, with a [`Solution`], a proof
//!   of unsatisfiability, or an exhausted node budget.
//!
//! Ready-made problem builders for map colouring and Sudoku live in
//! [`problems`].
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solve `a != b` where `a` can be `1` or `2` and `b` can only be `1`; the
//! solver must deduce that `a` is `2`.
//!
//! ```
//! use necto::solver::csp::Csp;
//! use necto::solver::search::BacktrackingSearch;
//!
//! # fn main() -> necto::error::Result<()> {
//! let mut csp = Csp::new();
//! csp.add_variable("a", [1, 2])?;
//! csp.add_variable("b", [1])?;
//! csp.add_constraint("a", "b", |x, y| x != y)?;
//!
//! let (outcome, stats) = BacktrackingSearch::default().solve(&csp);
//! let solution = outcome.into_solution().expect("a != b is satisfiable");
//!
//! assert_eq!(solution.value("a"), Some(&2));
//! assert_eq!(solution.value("b"), Some(&1));
//! assert!(stats.nodes_visited >= 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`Csp`]: solver::csp::Csp
//! [`BacktrackingSearch`]: solver::search::BacktrackingSearch
//! [`SearchOutcome`]: solver::search::SearchOutcome
//! [`Solution`]: solver::solution::Solution
//! [`heuristics`]: solver::heuristics

pub mod error;
pub mod problems;
pub mod solver;
