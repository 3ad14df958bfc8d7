//! Core Sudoku engine: grid model, constraint checking, exhaustive
//! backtracking solving, and two-phase puzzle generation.
//!
//! The engine is the non-interactive half of a Sudoku application. A UI
//! front end (terminal, wasm, whatever) owns rendering and input and talks
//! to this crate through [`SudokuGame`], or uses the pieces directly:
//!
//! - [`Grid`]: a 9x9 grid of cells with row/column/box legality checks
//! - [`Solver`]: backtracking completion and bounded solution counting
//! - [`Generator`]: seeds a blank grid with random clues, solves it into a
//!   full solution, then carves blanks back out to the requested level,
//!   optionally guaranteeing the puzzle keeps exactly one solution
//!
//! # Examples
//!
//! ```
//! use sudoku_engine::{Generator, Solver};
//!
//! let mut generator = Generator::with_seed(42);
//! let generated = generator.generate().expect("generation failed");
//!
//! assert!(generated.solution.is_complete());
//! assert_eq!(generated.puzzle.empty_count(), 30);
//!
//! let solver = Solver::new();
//! assert!(solver.solve(&generated.puzzle).is_some());
//! ```

pub mod game;
pub mod generator;
pub mod grid;
pub mod solver;

pub use self::game::SudokuGame;
pub use self::generator::{
    GeneratedPuzzle, Generator, GeneratorConfig, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL, SEED_CLUES,
};
pub use self::grid::{Cell, Grid, Position};
pub use self::solver::Solver;
