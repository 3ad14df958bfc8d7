use crate::grid::{Grid, Position};
use crate::solver::Solver;
use serde::{Deserialize, Serialize};

/// Minimum level: at least 9 cells are carved out
pub const MIN_LEVEL: usize = 9;
/// Maximum level: 81 - 17, leaving the known minimum givens for a unique 9x9 puzzle
pub const MAX_LEVEL: usize = 64;
/// Default level when none is configured
pub const DEFAULT_LEVEL: usize = 30;
/// Number of random clues seeded before solving into a full solution
pub const SEED_CLUES: usize = 11;

/// Configuration for puzzle generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of cells to blank out of the solved grid. Callers are expected
    /// to stay within [MIN_LEVEL, MAX_LEVEL]; the engine takes the level as
    /// given.
    pub level: usize,
    /// Only carve a cell if the puzzle keeps exactly one solution
    pub single_solution: bool,
    /// Maximum attempts for the seed-and-solve and carve phases before
    /// generation reports failure
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            single_solution: false,
            max_attempts: 100,
        }
    }
}

/// A carved puzzle together with the solution it was carved from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    /// The puzzle handed to the player: `level` blanks, every filled cell a given
    pub puzzle: Grid,
    /// The fully solved grid the puzzle was derived from
    pub solution: Grid,
}

/// Two-phase Sudoku puzzle generator: seed a blank grid with a few random
/// legal clues, solve it into a full solution, then carve blanks back out.
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with default configuration and an OS-seeded rng
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducible puzzles
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// The current configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle at the given level, overriding the configured one
    pub fn generate_level(
        &mut self,
        level: usize,
        single_solution: bool,
    ) -> Option<GeneratedPuzzle> {
        self.config.level = level;
        self.config.single_solution = single_solution;
        self.generate()
    }

    /// Generate a puzzle/solution pair with the current configuration.
    ///
    /// The candidate value order is shuffled once per call, which is what
    /// varies the produced solution between runs. Returns None only when
    /// `max_attempts` rounds of seeding or carving all fail.
    pub fn generate(&mut self) -> Option<GeneratedPuzzle> {
        let mut order: [u8; Grid::SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.shuffle(&mut order);
        let solver = Solver::with_order(order);

        for _ in 0..self.config.max_attempts {
            let solution = match self.seed_and_solve(&solver) {
                Some(solution) => solution,
                None => continue,
            };
            if let Some(puzzle) = self.carve(&solution, &solver) {
                return Some(GeneratedPuzzle { puzzle, solution });
            }
        }

        None
    }

    /// Phase 1: place SEED_CLUES random legal clues on a blank grid, then
    /// complete it by backtracking. None means this seed admits no completion
    /// and the caller should reseed.
    fn seed_and_solve(&mut self, solver: &Solver) -> Option<Grid> {
        let mut grid = Grid::new();

        let mut placed = 0;
        while placed < SEED_CLUES {
            let pos = Position::new(
                self.rng.next_usize(Grid::SIZE),
                self.rng.next_usize(Grid::SIZE),
            );
            let value = self.rng.next_usize(Grid::SIZE) as u8 + 1;
            if grid.get(pos).is_some() || !grid.can_place(pos, value) {
                continue;
            }
            grid.set(pos, Some(value));
            placed += 1;
        }

        // A can_place-gated seed cannot violate the rules.
        debug_assert!(grid.is_valid());

        if solver.solve_in_place(&mut grid) {
            Some(grid)
        } else {
            None
        }
    }

    /// Phase 2: blank `level` uniformly random filled cells of a copy of the
    /// solution. Under single_solution, a removal that leaves more than one
    /// completion is undone and the cell is excluded until some other removal
    /// succeeds; None means no removable cell remains and the caller should
    /// start over from a fresh solution.
    fn carve(&mut self, solution: &Grid, solver: &Solver) -> Option<Grid> {
        let mut puzzle = solution.clone();
        let mut rejected = [[false; Grid::SIZE]; Grid::SIZE];

        let mut blanks = 0;
        while blanks < self.config.level {
            let open: Vec<Position> = puzzle
                .filled_positions()
                .into_iter()
                .filter(|pos| !rejected[pos.row][pos.col])
                .collect();
            if open.is_empty() {
                return None;
            }

            let pos = open[self.rng.next_usize(open.len())];
            let removed = puzzle.get(pos);
            puzzle.set(pos, None);

            if self.config.single_solution && !solver.has_unique_solution(&puzzle) {
                puzzle.set(pos, removed);
                rejected[pos.row][pos.col] = true;
            } else {
                // The uniqueness landscape changed; previously rejected
                // cells are fair game again.
                rejected = [[false; Grid::SIZE]; Grid::SIZE];
                blanks += 1;
            }
        }

        puzzle.mark_filled_as_given();
        Some(puzzle)
    }

    /// Fisher-Yates shuffle over the generator's rng
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Small PCG-style PRNG, seeded from the OS so the engine never touches the
/// wall clock, and explicitly seedable for reproducible generation.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter keeps seeds distinct if the OS
            // entropy source is unavailable.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        u64::from(xorshifted.rotate_right(rot))
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
