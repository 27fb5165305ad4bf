//! Crossword puzzle generation from question and answer records
//!
//! Extracts answer words from raw study records, keeps the most
//! promising candidates, and weaves them onto a square letter grid
//! under intersection constraints. Placement search is randomized but
//! seeded, so a seed plus input reproduces a puzzle exactly. The
//! top-level entry point never fails: internal errors are swallowed and
//! replaced by a fixed fallback puzzle.

#![forbid(unsafe_code)]

/// Core algorithm: extraction, selection, placement, and the generator
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Letter grid storage and spatial helpers
pub mod spatial;

pub use algorithm::generator::{GeneratorConfig, Puzzle, PuzzleGenerator};
pub use io::error::{PuzzleError, Result};
