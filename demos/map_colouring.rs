use necto::{problems::map_colouring, solver::search::BacktrackingSearch};

pub fn main() {
    tracing_subscriber::fmt::init();
    println!("Solving the map colouring problem...");

    let csp = map_colouring::australia();
    let (outcome, stats) = BacktrackingSearch::default().solve(&csp);

    match outcome.into_solution() {
        Some(solution) => {
            println!("Solution found!");
            for (region, colour) in solution.iter() {
                println!("{region}: {colour:?}");
            }
            println!(
                "\nNodes visited: {}, backtracks: {}",
                stats.nodes_visited, stats.backtracks
            );
        }
        None => println!("No solution found."),
    }
}
