//! Ready-made problem builders that compile concrete puzzles into
//! [`Csp`](crate::solver::csp::Csp) instances.

pub mod map_colouring;
pub mod sudoku;
