//! Sudoku: parses the plain-text 9×9 board format, compiles a board into a
//! CSP, and renders solved grids.
//!
//! The text format is nine lines of nine characters each, `'1'`–`'9'` for
//! givens and `'0'` for a blank cell.

use crate::{
    error::{Error, Result},
    solver::{csp::Csp, solution::Solution},
};

/// A parsed board: 0 marks a blank cell, 1–9 are givens.
pub type Board = [[u8; 9]; 9];

/// A sample under-constrained board with a unique completion.
pub const SAMPLE_BOARD: &str = "\
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079
";

/// The variable name of a cell.
pub fn cell_name(row: usize, col: usize) -> String {
    format!("{row}-{col}")
}

/// Parses the plain-text board format, rejecting malformed input before any
/// CSP is built.
pub fn parse_board(text: &str) -> Result<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != 9 {
        return Err(Error::BoardRowCount(rows.len()));
    }

    let mut board = [[0u8; 9]; 9];
    for (r, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != 9 {
            return Err(Error::BoardRowLength {
                row: r,
                len: cells.len(),
            });
        }
        for (c, ch) in cells.into_iter().enumerate() {
            match ch.to_digit(10) {
                Some(digit) => board[r][c] = digit as u8,
                None => return Err(Error::BoardCharacter { ch, row: r, col: c }),
            }
        }
    }
    Ok(board)
}

/// Compiles a board into a CSP: one variable per cell, blank cells over
/// `1..=9`, givens as singletons, and an all-different group for every row,
/// column, and 3×3 box.
pub fn build(board: &Board) -> Csp<u8> {
    let mut csp = Csp::new();

    for (r, row) in board.iter().enumerate() {
        for (c, &given) in row.iter().enumerate() {
            let result = if given == 0 {
                csp.add_variable(cell_name(r, c), 1..=9u8)
            } else {
                csp.add_variable(cell_name(r, c), [given])
            };
            result.expect("cell names are unique");
        }
    }

    for r in 0..9 {
        let row: Vec<String> = (0..9).map(|c| cell_name(r, c)).collect();
        csp.add_all_different(&row).expect("row cells are registered");
    }
    for c in 0..9 {
        let col: Vec<String> = (0..9).map(|r| cell_name(r, c)).collect();
        csp.add_all_different(&col)
            .expect("column cells are registered");
    }
    for box_row in 0..3 {
        for box_col in 0..3 {
            let mut cells = Vec::with_capacity(9);
            for r in (box_row * 3)..(box_row * 3 + 3) {
                for c in (box_col * 3)..(box_col * 3 + 3) {
                    cells.push(cell_name(r, c));
                }
            }
            csp.add_all_different(&cells)
                .expect("box cells are registered");
        }
    }

    csp
}

/// Reads a solved grid back out of a solution, row-major.
pub fn solution_grid(solution: &Solution<u8>) -> Board {
    let mut grid = [[0u8; 9]; 9];
    for (r, row) in grid.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if let Some(&digit) = solution.value(&cell_name(r, c)) {
                *cell = digit;
            }
        }
    }
    grid
}

/// Formats a solved grid with box-separator lines. Purely presentational.
pub fn render_solution(solution: &Solution<u8>) -> String {
    let grid = solution_grid(solution);
    let mut out = String::new();
    for (r, row) in grid.iter().enumerate() {
        if r % 3 == 0 && r != 0 {
            out.push_str("------+-------+------\n");
        }
        for (c, cell) in row.iter().enumerate() {
            if c % 3 == 0 && c != 0 {
                out.push_str("| ");
            }
            out.push_str(&cell.to_string());
            if c != 8 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::search::BacktrackingSearch;

    const SAMPLE_SOLUTION: Board = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ];

    fn assert_grid_is_valid(grid: &Board) {
        let all_digits = |digits: &mut dyn Iterator<Item = u8>| {
            let mut seen: Vec<u8> = digits.collect();
            seen.sort_unstable();
            seen == (1..=9).collect::<Vec<u8>>()
        };

        for r in 0..9 {
            assert!(all_digits(&mut (0..9).map(|c| grid[r][c])), "row {r}");
        }
        for c in 0..9 {
            assert!(all_digits(&mut (0..9).map(|r| grid[r][c])), "column {c}");
        }
        for br in 0..3 {
            for bc in 0..3 {
                let mut cells = (0..9).map(|i| grid[br * 3 + i / 3][bc * 3 + i % 3]);
                assert!(all_digits(&mut cells), "box {br},{bc}");
            }
        }
    }

    #[test]
    fn parse_rejects_wrong_row_count() {
        let err = parse_board("123456789\n123456789\n").unwrap_err();
        assert!(matches!(err, Error::BoardRowCount(2)));
    }

    #[test]
    fn parse_rejects_wrong_row_length() {
        let mut text = String::from("1234567890\n");
        text.push_str(&"123456789\n".repeat(8));
        let err = parse_board(&text).unwrap_err();
        assert!(matches!(err, Error::BoardRowLength { row: 0, len: 10 }));
    }

    #[test]
    fn parse_rejects_invalid_characters() {
        let mut text = String::from("12345678x\n");
        text.push_str(&"123456789\n".repeat(8));
        let err = parse_board(&text).unwrap_err();
        assert!(matches!(
            err,
            Error::BoardCharacter {
                ch: 'x',
                row: 0,
                col: 8
            }
        ));
    }

    #[test]
    fn parse_reads_givens_and_blanks() {
        let board = parse_board(SAMPLE_BOARD).unwrap();
        assert_eq!(board[0][0], 5);
        assert_eq!(board[0][2], 0);
        assert_eq!(board[8][8], 9);
    }

    #[test]
    fn sample_board_solves_to_its_unique_completion() {
        let board = parse_board(SAMPLE_BOARD).unwrap();
        let csp = build(&board);

        let (outcome, stats) = BacktrackingSearch::default().solve(&csp);
        let solution = outcome.into_solution().expect("the sample board is solvable");
        let grid = solution_grid(&solution);

        assert_eq!(grid, SAMPLE_SOLUTION);
        assert_grid_is_valid(&grid);
        assert!(stats.nodes_visited >= 1);
    }

    #[test]
    fn givens_survive_into_the_solution() {
        let board = parse_board(SAMPLE_BOARD).unwrap();
        let csp = build(&board);
        let solution = BacktrackingSearch::default()
            .solve(&csp)
            .0
            .into_solution()
            .unwrap();

        for r in 0..9 {
            for c in 0..9 {
                if board[r][c] != 0 {
                    assert_eq!(solution.value(&cell_name(r, c)), Some(&board[r][c]));
                }
            }
        }
    }

    #[test]
    fn sample_solution_agrees_with_reference_solver() {
        let line: String = SAMPLE_BOARD
            .lines()
            .flat_map(|l| l.trim().chars())
            .map(|ch| if ch == '0' { '.' } else { ch })
            .collect();
        let reference = sudoku::Sudoku::from_str_line(&line)
            .expect("sample board is well formed")
            .solution()
            .expect("sample board has a unique completion");
        let reference_bytes = reference.to_bytes();

        let board = parse_board(SAMPLE_BOARD).unwrap();
        let solution = BacktrackingSearch::default()
            .solve(&build(&board))
            .0
            .into_solution()
            .unwrap();
        let grid = solution_grid(&solution);

        for r in 0..9 {
            for c in 0..9 {
                assert_eq!(grid[r][c], reference_bytes[r * 9 + c]);
            }
        }
    }

    #[test]
    fn duplicate_given_in_a_row_is_unsatisfiable() {
        // Two 5s forced into the first row.
        let text = SAMPLE_BOARD.replacen("530070000", "530070005", 1);
        let board = parse_board(&text).unwrap();
        let (outcome, _) = BacktrackingSearch::default().solve(&build(&board));
        assert!(outcome.is_unsatisfiable());
    }

    #[test]
    fn render_draws_box_separators() {
        let board = parse_board(SAMPLE_BOARD).unwrap();
        let solution = BacktrackingSearch::default()
            .solve(&build(&board))
            .0
            .into_solution()
            .unwrap();

        let rendered = render_solution(&solution);
        assert_eq!(rendered.lines().count(), 11);
        assert_eq!(
            rendered.lines().nth(3),
            Some("------+-------+------")
        );
        assert!(rendered.starts_with("5 3 4 | 6 7 8 | 9 1 2"));
    }

    #[cfg(test)]
    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        // Relabelling digits and swapping rows/columns within a band preserve
        // sudoku validity, so transformed copies of a known solved grid are a
        // cheap source of fresh solvable boards.
        fn transform(grid: &mut Board, step: (usize, usize, usize, usize)) {
            match step {
                (0, a, b, _) => {
                    for row in grid.iter_mut() {
                        for cell in row.iter_mut() {
                            if *cell == a as u8 {
                                *cell = b as u8;
                            } else if *cell == b as u8 {
                                *cell = a as u8;
                            }
                        }
                    }
                }
                (1, band, r1, r2) => grid.swap(band * 3 + r1, band * 3 + r2),
                (2, band, c1, c2) => {
                    for row in grid.iter_mut() {
                        row.swap(band * 3 + c1, band * 3 + c2);
                    }
                }
                _ => unreachable!(),
            }
        }

        fn generated_puzzles() -> impl Strategy<Value = (Board, Board)> {
            let steps = proptest::collection::vec(
                prop_oneof![
                    (1..=9usize, 1..=9usize)
                        .prop_filter("digits must differ", |(a, b)| a != b)
                        .prop_map(|(a, b)| (0, a, b, 0)),
                    (0..3usize, 0..3usize, 0..3usize)
                        .prop_filter("rows must differ", |(_, r1, r2)| r1 != r2)
                        .prop_map(|(band, r1, r2)| (1, band, r1, r2)),
                    (0..3usize, 0..3usize, 0..3usize)
                        .prop_filter("columns must differ", |(_, c1, c2)| c1 != c2)
                        .prop_map(|(band, c1, c2)| (2, band, c1, c2)),
                ],
                5..20,
            );
            let holes = proptest::collection::hash_set((0..9usize, 0..9usize), 10..=40);

            (steps, holes).prop_map(|(steps, holes)| {
                let mut solved = SAMPLE_SOLUTION;
                for step in steps {
                    transform(&mut solved, step);
                }
                let mut puzzle = solved;
                for (r, c) in holes {
                    puzzle[r][c] = 0;
                }
                (puzzle, solved)
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(16))]

            #[test]
            fn generated_boards_solve_to_valid_grids((puzzle, _solved) in generated_puzzles()) {
                let (outcome, _) = BacktrackingSearch::default().solve(&build(&puzzle));
                let solution = outcome.into_solution();
                prop_assert!(solution.is_some(), "a punched solved grid stays solvable");

                let grid = solution_grid(&solution.unwrap());
                assert_grid_is_valid(&grid);
                for r in 0..9 {
                    for c in 0..9 {
                        if puzzle[r][c] != 0 {
                            prop_assert_eq!(grid[r][c], puzzle[r][c]);
                        }
                    }
                }
            }
        }
    }
}
