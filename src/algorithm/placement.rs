//! Placement geometry and per-cell validity rules
//!
//! A candidate placement is checked cell by cell: occupied cells must
//! carry the identical letter (a deliberate intersection), empty cells
//! must not touch perpendicular neighbours of other words, and the
//! cells just before and after the word along its axis must be free so
//! words never run into each other end to end.

use serde::{Deserialize, Serialize};

use crate::spatial::grid::LetterGrid;

/// Orientation of a word on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Horizontal, left to right
    Across,
    /// Vertical, top to bottom
    Down,
}

impl Direction {
    /// Per-letter (row, col) step along the placement axis
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

/// A word committed to the grid together with its clue and start cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// The placed answer word
    pub word: String,
    /// Clue text shown to the solver
    pub clue: String,
    /// Row of the first letter
    pub row: usize,
    /// Column of the first letter
    pub col: usize,
    /// Placement orientation
    pub direction: Direction,
}

/// Test a placement, returning its intersection count when valid
///
/// `None` means the word does not fit at this start cell in this
/// direction. `Some(0)` is only acceptable for the opening word of a
/// run; callers placing onto a non-empty grid must require at least
/// one intersection.
pub fn check_placement(
    grid: &LetterGrid,
    word: &str,
    row: usize,
    col: usize,
    direction: Direction,
) -> Option<usize> {
    let bytes = word.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let (dr, dc) = direction.delta();
    let (row, col) = (row as i32, col as i32);
    let last = bytes.len() as i32 - 1;
    let (end_row, end_col) = (row + dr * last, col + dc * last);

    if !grid.in_bounds(row, col) || !grid.in_bounds(end_row, end_col) {
        return None;
    }

    // No other word may abut the ends along the placement axis.
    if !grid.is_free(row - dr, col - dc) || !grid.is_free(end_row + dr, end_col + dc) {
        return None;
    }

    let mut intersections = 0;
    for (index, &letter) in bytes.iter().enumerate() {
        let (r, c) = (row + dr * index as i32, col + dc * index as i32);
        match grid.letter(r, c) {
            Some(existing) => {
                if existing != letter {
                    return None;
                }
                intersections += 1;
            }
            None => {
                // A fresh letter may not sit beside a parallel word.
                if !grid.is_free(r - dc, c - dr) || !grid.is_free(r + dc, c + dr) {
                    return None;
                }
            }
        }
    }

    Some(intersections)
}

/// Row-major scan for the first cell where the word crosses placed letters
///
/// Only placements with at least one intersection qualify, so this is
/// never used for the opening word of a run.
pub fn find_slot(grid: &LetterGrid, word: &str, direction: Direction) -> Option<(usize, usize)> {
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if check_placement(grid, word, row, col, direction).is_some_and(|count| count > 0) {
                return Some((row, col));
            }
        }
    }
    None
}

/// Centered start cell for the opening word, `None` when it cannot fit
pub const fn centered_start(grid_size: usize, word_len: usize) -> Option<(usize, usize)> {
    if word_len == 0 || word_len > grid_size {
        None
    } else {
        Some((grid_size / 2, (grid_size - word_len) / 2))
    }
}

/// Write the word's letters into the grid
pub fn write_word(grid: &mut LetterGrid, word: &str, row: usize, col: usize, direction: Direction) {
    let (dr, dc) = direction.delta();
    for (index, letter) in word.bytes().enumerate() {
        grid.set(row + dr as usize * index, col + dc as usize * index, letter);
    }
}
