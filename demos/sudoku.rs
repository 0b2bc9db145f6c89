use std::path::PathBuf;

use clap::Parser;
use necto::{
    problems::sudoku,
    solver::{
        heuristics::{
            value::IdentityValueOrdering,
            variable::{MinimumRemainingValuesHeuristic, RandomizedMrvHeuristic},
        },
        search::{BacktrackingSearch, SearchOutcome},
        stats::render_stats_table,
    },
};
use tracing_subscriber::EnvFilter;

/// Solve a 9x9 sudoku board with the AC-3 + backtracking engine.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a board file: 9 lines of 9 digits, `0` marking a blank cell.
    /// Falls back to a built-in sample board.
    board: Option<PathBuf>,

    /// Break MRV ties with a seeded random choice instead of registration
    /// order.
    #[arg(long)]
    randomized: bool,

    /// Seed for --randomized.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the per-arc revision table after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the search statistics as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let text = match &args.board {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("cannot read {}: {err}", path.display());
                std::process::exit(2);
            }
        },
        None => sudoku::SAMPLE_BOARD.to_string(),
    };

    let board = match sudoku::parse_board(&text) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid board: {err}");
            std::process::exit(2);
        }
    };

    let csp = sudoku::build(&board);
    let search = if args.randomized {
        BacktrackingSearch::new(
            Box::new(RandomizedMrvHeuristic::seeded(args.seed)),
            Box::new(IdentityValueOrdering),
        )
    } else {
        BacktrackingSearch::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(IdentityValueOrdering),
        )
    };

    let (outcome, stats) = search.solve(&csp);

    match outcome {
        SearchOutcome::Solved(solution) => {
            println!("{}", sudoku::render_solution(&solution));
            println!(
                "Nodes visited: {}, backtracks: {}",
                stats.nodes_visited, stats.backtracks
            );
        }
        SearchOutcome::Unsatisfiable => println!("No solution exists for this board."),
        SearchOutcome::BudgetExhausted => println!("Search stopped: node budget exhausted."),
    }

    if args.stats {
        println!("{}", render_stats_table(&stats, &csp));
    }
    if args.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("cannot serialize stats: {err}"),
        }
    }
}
