//! The generic solver backend: problem storage, AC-3 propagation, and
//! backtracking search.

pub mod csp;
pub mod domain;
pub mod heuristics;
pub mod propagate;
pub mod search;
pub mod solution;
pub mod stats;
pub mod value;
pub mod work_list;
