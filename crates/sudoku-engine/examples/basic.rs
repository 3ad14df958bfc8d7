//! Basic example of using the Sudoku engine

use sudoku_engine::{Generator, Grid, Solver, DEFAULT_LEVEL};

fn main() {
    // Generate a puzzle with a unique solution
    println!("Generating a puzzle with {} blanks...\n", DEFAULT_LEVEL);
    let mut generator = Generator::new();
    let generated = match generator.generate_level(DEFAULT_LEVEL, true) {
        Some(generated) => generated,
        None => {
            println!("Generation exhausted its attempt budget");
            return;
        }
    };

    println!("Generated puzzle:");
    println!("{}", generated.puzzle);

    // Show some stats
    println!("Given cells: {}", generated.puzzle.given_count());
    println!("Empty cells: {}\n", generated.puzzle.empty_count());

    // Solve it
    println!("Solving...\n");
    let solver = Solver::new();
    if let Some(solution) = solver.solve(&generated.puzzle) {
        println!("Solution:");
        println!("{}", solution);
    } else {
        println!("No solution found (this shouldn't happen for a generated puzzle!)");
    }

    // Parse a puzzle from a string
    println!("--- Parsing a puzzle from string ---\n");
    let puzzle_string = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    if let Some(grid) = Grid::from_string(puzzle_string) {
        println!("Parsed puzzle:");
        println!("{}", grid);

        // Check uniqueness
        let solutions = solver.count_solutions(&grid, 2);
        println!("Number of solutions (up to 2): {}", solutions);
    }
}
