//! Letter grid storage with checked cell access
//!
//! The grid is a square `ndarray` matrix of cell bytes, zero meaning the
//! cell holds no letter yet. Signed coordinates are accepted by the read
//! helpers so placement rules can probe neighbours of border cells
//! without bounds arithmetic at every call site.

use ndarray::Array2;

/// Byte stored in cells that hold no letter
pub const EMPTY_CELL: u8 = 0;

/// Square letter grid owned by a single generation run
///
/// Cells hold ASCII uppercase letter bytes once written. The grid never
/// resizes; the side length is fixed when the run sizes it from the
/// selected words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Array2<u8>,
}

impl LetterGrid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::zeros((size, size)),
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether the coordinates fall inside the grid
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size() && (col as usize) < self.size()
    }

    /// Letter at the coordinates, `None` when out of bounds or empty
    pub fn letter(&self, row: i32, col: i32) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get([row as usize, col as usize])
            .copied()
            .filter(|&cell| cell != EMPTY_CELL)
    }

    /// Whether the cell is free: outside the grid or holding no letter
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        self.letter(row, col).is_none()
    }

    /// Store a letter; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, letter: u8) {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = letter;
        }
    }

    /// Rows as display strings, `.` marking empty cells
    pub fn row_strings(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| {
                        if cell == EMPTY_CELL {
                            '.'
                        } else {
                            char::from(cell)
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterGrid;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = LetterGrid::new(10);
        assert_eq!(grid.size(), 10);
        for row in 0..10 {
            for col in 0..10 {
                assert!(grid.is_free(row, col));
                assert_eq!(grid.letter(row, col), None);
            }
        }
    }

    #[test]
    fn test_set_and_read_back() {
        let mut grid = LetterGrid::new(5);
        grid.set(2, 3, b'Q');
        assert_eq!(grid.letter(2, 3), Some(b'Q'));
        assert!(!grid.is_free(2, 3));
    }

    #[test]
    fn test_out_of_bounds_reads_are_free() {
        let grid = LetterGrid::new(5);
        assert!(grid.is_free(-1, 0));
        assert!(grid.is_free(0, -1));
        assert!(grid.is_free(5, 0));
        assert!(!grid.in_bounds(5, 4));
        assert!(grid.in_bounds(4, 4));
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut grid = LetterGrid::new(3);
        grid.set(7, 7, b'X');
        assert_eq!(grid.size(), 3);
        assert!(grid.row_strings().iter().all(|row| row == "..."));
    }

    #[test]
    fn test_row_strings_mark_letters() {
        let mut grid = LetterGrid::new(3);
        grid.set(1, 0, b'A');
        grid.set(1, 2, b'Z');
        assert_eq!(grid.row_strings(), vec!["...", "A.Z", "..."]);
    }
}
