//! Algorithm constants and runtime configuration defaults

// Normalized answer length window for placement
/// Minimum normalized answer length eligible for placement
pub const MIN_WORD_LETTERS: usize = 3;
/// Maximum normalized answer length eligible for placement
pub const MAX_WORD_LETTERS: usize = 12;

/// Default cap on words selected for one puzzle
pub const DEFAULT_WORD_CAP: usize = 15;

// Grid sizing bounds
/// Smallest generated grid side
pub const MIN_GRID_SIZE: usize = 10;
/// Largest generated grid side
pub const MAX_GRID_SIZE: usize = 20;
/// Margin added around the longest word when sizing the grid
pub const GRID_MARGIN: usize = 2;

// Bounds placement work at O(words x attempts x size^2)
/// Randomized placement attempts per word before it is dropped
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Side length of the fallback puzzle grid
pub const FALLBACK_GRID_SIZE: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_puzzle";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
