use crate::generator::Generator;
use crate::grid::{Grid, Position};
use crate::solver::Solver;

/// The engine facade handed to UI front ends.
///
/// Owns the current puzzle grid and the solution it was carved from, plus the
/// generator used to produce new pairs. The front end edits the puzzle grid
/// through `set_value`/`clear_value` (or directly via `puzzle_mut`) and asks
/// the engine for legality checks, solving, and layout constants; it never
/// needs to know how generation or solving work.
pub struct SudokuGame {
    puzzle: Grid,
    solution: Grid,
    generator: Generator,
}

impl Default for SudokuGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SudokuGame {
    /// Create an empty game: no puzzle is populated until `generate` is called
    pub fn new() -> Self {
        Self {
            puzzle: Grid::new(),
            solution: Grid::new(),
            generator: Generator::new(),
        }
    }

    /// Create a game whose generator is seeded for reproducible puzzles
    pub fn with_seed(seed: u64) -> Self {
        Self {
            puzzle: Grid::new(),
            solution: Grid::new(),
            generator: Generator::with_seed(seed),
        }
    }

    /// Load a fixed puzzle from an 81-character string. The grid must parse,
    /// pass the rules, and admit a completion; the completion is retained as
    /// the solution grid.
    pub fn from_string(s: &str) -> Option<Self> {
        let puzzle = Grid::from_string(s)?;
        let solution = Solver::new().solve(&puzzle)?;

        Some(Self {
            puzzle,
            solution,
            generator: Generator::new(),
        })
    }

    /// Generate a fresh puzzle/solution pair.
    ///
    /// `level` is the number of blanks to carve; callers are expected to pass
    /// a value within [MIN_LEVEL, MAX_LEVEL]. With `single_solution` the
    /// carved puzzle keeps exactly one completion. Returns false when the
    /// generator exhausts its attempt budget, in which case the previous
    /// grids are left in place.
    pub fn generate(&mut self, level: usize, single_solution: bool) -> bool {
        match self.generator.generate_level(level, single_solution) {
            Some(generated) => {
                self.puzzle = generated.puzzle;
                self.solution = generated.solution;
                true
            }
            None => false,
        }
    }

    /// The puzzle grid being played
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// Mutable access to the puzzle grid for direct edits by the front end
    pub fn puzzle_mut(&mut self) -> &mut Grid {
        &mut self.puzzle
    }

    /// The solution grid (for reveal/verification features)
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Whether a puzzle has been generated or loaded
    pub fn is_populated(&self) -> bool {
        !self.puzzle.is_blank()
    }

    /// Attempt to complete the current puzzle grid, player edits included.
    ///
    /// Works on a scratch copy; the puzzle grid is never mutated. On success
    /// the completion becomes the new solution grid. False means the puzzle
    /// grid either breaks the rules or admits no completion, both normal
    /// outcomes for a user-edited grid.
    pub fn solve(&mut self) -> bool {
        match Solver::new().solve(&self.puzzle) {
            Some(solved) => {
                self.solution = solved;
                true
            }
            None => false,
        }
    }

    /// Whole-grid rule validity of the puzzle grid
    pub fn check(&self) -> bool {
        self.puzzle.is_valid()
    }

    /// Single-cell legality check, for interactive hints. Out-of-range
    /// coordinates or values are never legal.
    pub fn can_set_value(&self, row: usize, col: usize, value: u8) -> bool {
        row < Grid::SIZE && col < Grid::SIZE && self.puzzle.can_place(Position::new(row, col), value)
    }

    /// Write a player value into the puzzle grid. Rejects out-of-range
    /// coordinates, given cells, and rule conflicts without mutating anything.
    pub fn set_value(&mut self, row: usize, col: usize, value: u8) -> bool {
        if !self.can_set_value(row, col, value) {
            return false;
        }
        let pos = Position::new(row, col);
        if self.puzzle.cell(pos).is_given() {
            return false;
        }
        self.puzzle.set(pos, Some(value));
        true
    }

    /// Blank a non-given cell of the puzzle grid
    pub fn clear_value(&mut self, row: usize, col: usize) -> bool {
        if row >= Grid::SIZE || col >= Grid::SIZE {
            return false;
        }
        let pos = Position::new(row, col);
        if self.puzzle.cell(pos).is_given() {
            return false;
        }
        self.puzzle.set(pos, None);
        true
    }

    /// The value at a position of the puzzle grid
    pub fn value(&self, row: usize, col: usize) -> Option<u8> {
        if row >= Grid::SIZE || col >= Grid::SIZE {
            return None;
        }
        self.puzzle.get(Position::new(row, col))
    }

    /// Whether a value is a playable symbol
    pub fn in_range(&self, value: u8) -> bool {
        (1..=9).contains(&value)
    }

    /// The textual blank sentinel, for rendering
    pub fn blank(&self) -> char {
        Grid::BLANK
    }

    /// Grid dimension, for layout
    pub fn size(&self) -> usize {
        Grid::SIZE
    }

    /// Box dimension, for layout
    pub fn box_size(&self) -> usize {
        Grid::BOX_SIZE
    }
}
