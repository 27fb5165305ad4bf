//! Puzzle generation orchestration with seeded stochastic placement
//!
//! The generator owns the random source and the knobs of one or more
//! generation runs; each run owns its grid and placed-word list, which
//! are threaded explicitly through the placement helpers. The public
//! `generate` entry point never fails: any internal error is replaced
//! by a fixed fallback puzzle.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::extraction::{ClueWord, extract_clue_words};
use crate::algorithm::placement::{
    Direction, PlacedWord, centered_start, find_slot, write_word,
};
use crate::algorithm::selection::{grid_size, select_words};
use crate::io::configuration::{
    DEFAULT_WORD_CAP, FALLBACK_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_WORD_LETTERS,
    PLACEMENT_ATTEMPTS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::records::SourceRecord;
use crate::spatial::grid::LetterGrid;

/// Generation parameters controlling selection and placement behavior
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Cap on words selected for one puzzle
    pub word_cap: usize,
    /// Randomized placement attempts per word before it is dropped
    pub attempts: usize,
    /// Smallest grid side length
    pub min_grid: usize,
    /// Largest grid side length
    pub max_grid: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            word_cap: DEFAULT_WORD_CAP,
            attempts: PLACEMENT_ATTEMPTS,
            min_grid: MIN_GRID_SIZE,
            max_grid: MAX_GRID_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// Check the parameters for internal consistency
    ///
    /// # Errors
    ///
    /// Returns an error if any count is zero, the grid bounds are
    /// inverted, or the grid floor is smaller than the shortest
    /// placeable word.
    pub fn validate(&self) -> Result<()> {
        if self.word_cap == 0 {
            return Err(invalid_parameter(
                "word_cap",
                &self.word_cap,
                &"at least one word must be selectable",
            ));
        }
        if self.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.attempts,
                &"placement needs at least one attempt per word",
            ));
        }
        if self.min_grid < MIN_WORD_LETTERS {
            return Err(invalid_parameter(
                "min_grid",
                &self.min_grid,
                &"grid floor is smaller than the shortest placeable word",
            ));
        }
        if self.max_grid < self.min_grid {
            return Err(invalid_parameter(
                "max_grid",
                &self.max_grid,
                &"grid ceiling is below the grid floor",
            ));
        }
        Ok(())
    }
}

/// A finished puzzle, immutable once returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The letter grid with all placed words written in
    pub grid: LetterGrid,
    /// Grid side length
    pub size: usize,
    /// Words committed to the grid, in placement order
    pub words: Vec<PlacedWord>,
    /// Selected words that found no valid placement
    pub dropped: Vec<ClueWord>,
}

/// Seeded crossword generator
///
/// Holds the configuration and the random source for direction choices.
/// The same seed and input reproduce the same puzzle; no state is
/// shared between generation calls beyond the advancing random stream.
pub struct PuzzleGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl PuzzleGenerator {
    /// Create a generator with default parameters
    pub fn new(seed: u64) -> Self {
        Self::with_config(GeneratorConfig::default(), seed)
    }

    /// Create a generator with custom parameters
    pub fn with_config(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Access the generation parameters
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle, falling back to a fixed one on any error
    ///
    /// This is the one-way contract of the component: the caller always
    /// receives a usable puzzle. The error behind a fallback is reported
    /// on stderr only.
    // Allow print for operator-visible fallback diagnostics
    #[allow(clippy::print_stderr)]
    pub fn generate(&mut self, records: &[SourceRecord]) -> Puzzle {
        match self.try_generate(records) {
            Ok(puzzle) => puzzle,
            Err(error) => {
                eprintln!("Puzzle generation failed: {error} (returning fallback puzzle)");
                fallback_puzzle()
            }
        }
    }

    /// Generate a puzzle, surfacing internal errors to the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the generator parameters fail validation.
    pub fn try_generate(&mut self, records: &[SourceRecord]) -> Result<Puzzle> {
        self.config.validate()?;

        let extracted = extract_clue_words(records);
        let selected = select_words(extracted, self.config.word_cap);
        let size = grid_size(&selected, self.config.min_grid, self.config.max_grid);

        let mut grid = LetterGrid::new(size);
        let (words, dropped) = self.place_words(selected, &mut grid);

        Ok(Puzzle {
            grid,
            size,
            words,
            dropped,
        })
    }

    /// Place each selected word, collecting successes and drops
    ///
    /// The first word that fits is anchored at the grid center, across.
    /// "First" is decided by the call-local placed list, never by state
    /// outside this run.
    fn place_words(
        &mut self,
        selected: Vec<ClueWord>,
        grid: &mut LetterGrid,
    ) -> (Vec<PlacedWord>, Vec<ClueWord>) {
        let mut placed = Vec::new();
        let mut dropped = Vec::new();

        for entry in selected {
            let slot = if placed.is_empty() {
                centered_start(grid.size(), entry.word.len())
                    .map(|(row, col)| (row, col, Direction::Across))
            } else {
                self.randomized_slot(grid, &entry.word)
            };

            match slot {
                Some((row, col, direction)) => {
                    write_word(grid, &entry.word, row, col, direction);
                    placed.push(PlacedWord {
                        word: entry.word,
                        clue: entry.clue,
                        row,
                        col,
                        direction,
                    });
                }
                None => dropped.push(entry),
            }
        }

        (placed, dropped)
    }

    /// Bounded random search for a valid crossing placement
    ///
    /// Each attempt draws a direction at random, then scans the grid
    /// row-major for the first cell where the word crosses an already
    /// placed word. Words that exhaust the budget are dropped.
    fn randomized_slot(
        &mut self,
        grid: &LetterGrid,
        word: &str,
    ) -> Option<(usize, usize, Direction)> {
        for _ in 0..self.config.attempts {
            let direction = if self.rng.random() {
                Direction::Across
            } else {
                Direction::Down
            };
            if let Some((row, col)) = find_slot(grid, word, direction) {
                return Some((row, col, direction));
            }
        }
        None
    }
}

/// The fixed puzzle returned whenever generation fails internally
///
/// Two intersecting words on a 5 x 5 grid, sharing their initial letter.
pub fn fallback_puzzle() -> Puzzle {
    let mut grid = LetterGrid::new(FALLBACK_GRID_SIZE);
    let mut words = Vec::with_capacity(2);

    let fixed = [
        ("STUDY", "Careful reading and practice", Direction::Across),
        ("SMART", "Quick to pick things up", Direction::Down),
    ];
    for (word, clue, direction) in fixed {
        write_word(&mut grid, word, 0, 0, direction);
        words.push(PlacedWord {
            word: word.to_string(),
            clue: clue.to_string(),
            row: 0,
            col: 0,
            direction,
        });
    }

    Puzzle {
        grid,
        size: FALLBACK_GRID_SIZE,
        words,
        dropped: Vec::new(),
    }
}
