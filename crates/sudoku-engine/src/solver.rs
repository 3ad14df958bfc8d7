use crate::grid::{Grid, Position};

/// Exhaustive backtracking solver.
///
/// The solver owns the candidate value order it tries at each blank cell.
/// The default order is ascending; the generator injects a shuffled order so
/// that an under-constrained grid completes to a different solution per run.
/// The solver itself never randomizes, so its output is fully determined by
/// the input grid and the order it was built with.
#[derive(Debug, Clone)]
pub struct Solver {
    order: [u8; Grid::SIZE],
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver trying candidate values in ascending order
    pub fn new() -> Self {
        Self::with_order([1, 2, 3, 4, 5, 6, 7, 8, 9])
    }

    /// Create a solver trying candidate values in the given order
    pub fn with_order(order: [u8; Grid::SIZE]) -> Self {
        Self { order }
    }

    /// Solve the puzzle, returning the completed grid if one exists.
    ///
    /// The input is left untouched; the search runs on a copy. A grid that
    /// already violates the rules has no completion and returns None without
    /// searching.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        if !grid.is_valid() {
            return None;
        }

        let mut working = grid.clone();
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Complete the grid in place, returning whether a completion exists.
    ///
    /// Cells are scanned in row-major order; the first blank cell is tried
    /// with each candidate value that passes `can_place`, recursing on the
    /// rest of the grid and propagating the first success. On failure every
    /// speculative write is undone, leaving the grid as it was passed in.
    /// The caller is responsible for the validity precondition (see `solve`).
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        let pos = match first_empty(grid) {
            Some(pos) => pos,
            None => return true,
        };

        for &value in &self.order {
            if !grid.can_place(pos, value) {
                continue;
            }
            grid.set(pos, Some(value));
            if self.solve_in_place(grid) {
                return true;
            }
            grid.set(pos, None);
        }

        false
    }

    /// Count distinct completions of the grid, stopping as soon as `limit`
    /// is reached. An invalid grid has zero completions. The input is never
    /// mutated.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        if !grid.is_valid() {
            return 0;
        }

        let mut working = grid.clone();
        let mut count = 0;
        self.count_recursive(&mut working, &mut count, limit);
        count
    }

    /// Check if the puzzle has exactly one solution
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    /// Same recursion as `solve_in_place`, but a completed grid bumps the
    /// counter and keeps backtracking in search of further completions. The
    /// whole search short-circuits once the counter reaches the limit.
    fn count_recursive(&self, grid: &mut Grid, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }

        let pos = match first_empty(grid) {
            Some(pos) => pos,
            None => {
                *count += 1;
                return;
            }
        };

        for &value in &self.order {
            if *count >= limit {
                break;
            }
            if !grid.can_place(pos, value) {
                continue;
            }
            grid.set(pos, Some(value));
            self.count_recursive(grid, count, limit);
            grid.set(pos, None);
        }
    }
}

fn first_empty(grid: &Grid) -> Option<Position> {
    Position::all().find(|&pos| grid.get(pos).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    // A 17-clue puzzle from the literature, known to be uniquely solvable.
    const SEVENTEEN: &str =
        "000000010400000000020000000000050407008000300001090000300400200050100000000806000";
    const SEVENTEEN_SOLVED: &str =
        "693784512487512936125963874932651487568247391741398625319475268856129743274836159";

    #[test]
    fn test_solve_easy() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert!(solution.is_complete());
        assert!(solution.is_valid());
        assert_eq!(solution.to_string_compact(), SOLVED);
    }

    #[test]
    fn test_solve_does_not_mutate_input() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let snapshot = grid.clone();
        let solver = Solver::new();

        let _ = solver.solve(&grid);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_solved_grid_is_a_fixed_point() {
        let grid = Grid::from_string(SOLVED).unwrap();
        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert_eq!(solution.to_string_compact(), SOLVED);
    }

    #[test]
    fn test_solve_rejects_invalid_grid() {
        let mut grid = Grid::from_string(PUZZLE).unwrap();
        grid.set(Position::new(0, 8), Some(5)); // duplicates the 5 in row 0

        let solver = Solver::new();
        assert!(solver.solve(&grid).is_none());
        assert_eq!(solver.count_solutions(&grid, 2), 0);
    }

    #[test]
    fn test_unsolvable_grid_left_unchanged() {
        // (0,0) is blank but sees 2..9 in its row and 1 in its column, so no
        // candidate fits: valid grid, no completion.
        let mut grid = Grid::new();
        for (col, value) in (1..9).enumerate() {
            grid.set(Position::new(0, col + 1), Some(value + 1));
        }
        grid.set(Position::new(4, 0), Some(1));
        assert!(grid.is_valid());

        let snapshot = grid.clone();
        let solver = Solver::new();
        assert!(solver.solve(&grid).is_none());

        let mut working = grid.clone();
        assert!(!solver.solve_in_place(&mut working));
        assert_eq!(working, snapshot);
    }

    #[test]
    fn test_count_solutions_unique() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solver = Solver::new();

        assert_eq!(solver.count_solutions(&grid, 2), 1);
        assert!(solver.has_unique_solution(&grid));
    }

    #[test]
    fn test_count_solutions_stops_at_limit() {
        let grid = Grid::new();
        let solver = Solver::new();

        assert_eq!(solver.count_solutions(&grid, 2), 2);
        assert_eq!(solver.count_solutions(&grid, 5), 5);
        assert!(!solver.has_unique_solution(&grid));
    }

    #[test]
    fn test_seventeen_clue_puzzle_is_unique() {
        let grid = Grid::from_string(SEVENTEEN).unwrap();
        let solver = Solver::new();

        assert_eq!(solver.count_solutions(&grid, 2), 1);

        let solution = solver.solve(&grid).unwrap();
        assert_eq!(solution.to_string_compact(), SEVENTEEN_SOLVED);
    }

    #[test]
    fn test_value_order_steers_first_solution() {
        let grid = Grid::new();

        let ascending = Solver::new().solve(&grid).unwrap();
        assert_eq!(ascending.get(Position::new(0, 0)), Some(1));

        let descending = Solver::with_order([9, 8, 7, 6, 5, 4, 3, 2, 1])
            .solve(&grid)
            .unwrap();
        assert_eq!(descending.get(Position::new(0, 0)), Some(9));
        assert!(descending.is_valid());
        assert!(descending.is_complete());
    }
}
