pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while a problem is being assembled, before any search runs.
///
/// Infeasibility discovered *during* solving is not an error: the solver
/// reports it through [`SearchOutcome::Unsatisfiable`].
///
/// [`SearchOutcome::Unsatisfiable`]: crate::solver::search::SearchOutcome
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("variable `{0}` is already registered")]
    DuplicateVariable(String),

    #[error("constraint references unregistered variable `{0}`")]
    UnknownVariable(String),

    #[error("expected 9 board rows, found {0}")]
    BoardRowCount(usize),

    #[error("board row {row} has {len} cells, expected 9")]
    BoardRowLength { row: usize, len: usize },

    #[error("invalid board character `{ch}` at row {row}, column {col}")]
    BoardCharacter { ch: char, row: usize, col: usize },
}
