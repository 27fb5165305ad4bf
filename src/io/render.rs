//! Plain-text rendering of finished puzzles
//!
//! Produces the grid followed by the clue list grouped by orientation,
//! with 1-based start coordinates. Used by the CLI `--print` flag.

use crate::algorithm::generator::Puzzle;
use crate::algorithm::placement::Direction;

/// Render a puzzle as a grid plus grouped clue listing
pub fn render_puzzle(puzzle: &Puzzle) -> String {
    let mut out = String::new();

    for row in puzzle.grid.row_strings() {
        out.push_str(&row);
        out.push('\n');
    }

    for (direction, heading) in [(Direction::Across, "Across"), (Direction::Down, "Down")] {
        let mut entries = puzzle
            .words
            .iter()
            .filter(|word| word.direction == direction)
            .peekable();
        if entries.peek().is_none() {
            continue;
        }

        out.push('\n');
        out.push_str(heading);
        out.push_str(":\n");
        for word in entries {
            out.push_str(&format!(
                "  ({}, {}) {}: {}\n",
                word.row + 1,
                word.col + 1,
                word.word,
                word.clue
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::render_puzzle;
    use crate::algorithm::generator::fallback_puzzle;

    #[test]
    fn test_render_contains_grid_and_clues() {
        let rendered = render_puzzle(&fallback_puzzle());

        assert!(rendered.starts_with("STUDY\n"));
        assert!(rendered.contains("Across:\n"));
        assert!(rendered.contains("Down:\n"));
        assert!(rendered.contains("(1, 1) STUDY: Careful reading and practice"));
        assert!(rendered.contains("(1, 1) SMART: Quick to pick things up"));
    }

    #[test]
    fn test_render_empty_puzzle_is_grid_only() {
        let mut puzzle = fallback_puzzle();
        puzzle.words.clear();
        let rendered = render_puzzle(&puzzle);
        assert!(!rendered.contains("Across"));
        assert_eq!(rendered.lines().count(), 5);
    }
}
