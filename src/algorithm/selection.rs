//! Word selection and grid sizing ahead of placement
//!
//! Longer words anchor the grid and offer more intersection
//! opportunities, so selection keeps the longest candidates. Sizing
//! guarantees the longest word fits with margin and scales with the
//! word count to keep placement odds reasonable within the bounded
//! attempt budget.

use crate::algorithm::extraction::ClueWord;
use crate::io::configuration::GRID_MARGIN;

/// Keep the `cap` longest candidates
///
/// The sort is stable, so candidates of equal length stay in their
/// original relative order. Duplicates are kept.
pub fn select_words(mut candidates: Vec<ClueWord>, cap: usize) -> Vec<ClueWord> {
    candidates.sort_by(|a, b| b.word.len().cmp(&a.word.len()));
    candidates.truncate(cap);
    candidates
}

/// Grid side length for a selection, clamped to `[min_grid, max_grid]`
///
/// Takes the largest of the floor, the longest word plus margin, and
/// one-and-a-half times the word count. An empty selection gets the
/// floor size.
pub fn grid_size(selected: &[ClueWord], min_grid: usize, max_grid: usize) -> usize {
    let longest = selected
        .iter()
        .map(|entry| entry.word.len())
        .max()
        .unwrap_or(0);
    if longest == 0 {
        return min_grid;
    }

    let scaled = (selected.len() * 3).div_ceil(2);
    min_grid.max(longest + GRID_MARGIN).max(scaled).min(max_grid)
}

#[cfg(test)]
mod tests {
    use super::{grid_size, select_words};
    use crate::algorithm::extraction::ClueWord;

    fn pair(word: &str, clue: &str) -> ClueWord {
        ClueWord {
            word: word.to_string(),
            clue: clue.to_string(),
        }
    }

    #[test]
    fn test_selection_keeps_longest_words() {
        let candidates: Vec<ClueWord> = (3..=12)
            .map(|len| pair(&"X".repeat(len), "clue"))
            .collect();
        let selected = select_words(candidates, 4);
        let lengths: Vec<usize> = selected.iter().map(|entry| entry.word.len()).collect();
        assert_eq!(lengths, vec![12, 11, 10, 9]);
    }

    #[test]
    fn test_selection_cap_bounds_output() {
        let candidates: Vec<ClueWord> = (0..20).map(|_| pair("WORD", "clue")).collect();
        assert_eq!(select_words(candidates.clone(), 15).len(), 15);
        assert_eq!(select_words(candidates, 25).len(), 20);
    }

    #[test]
    fn test_selection_ties_keep_input_order() {
        let candidates = vec![
            pair("AAAA", "first"),
            pair("BBBB", "second"),
            pair("CCCCC", "third"),
            pair("DDDD", "fourth"),
        ];
        let selected = select_words(candidates, 4);
        let clues: Vec<&str> = selected.iter().map(|entry| entry.clue.as_str()).collect();
        assert_eq!(clues, vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn test_grid_size_floor_for_single_short_word() {
        let selected = vec![pair(&"A".repeat(8), "clue")];
        assert_eq!(grid_size(&selected, 10, 20), 10);
    }

    #[test]
    fn test_grid_size_empty_selection_gets_floor() {
        assert_eq!(grid_size(&[], 10, 20), 10);
    }

    #[test]
    fn test_grid_size_tracks_longest_word() {
        let selected = vec![pair(&"A".repeat(12), "clue"), pair("CAT", "clue")];
        assert_eq!(grid_size(&selected, 10, 20), 14);
    }

    #[test]
    fn test_grid_size_scales_with_count_and_clamps() {
        let selected: Vec<ClueWord> = (0..15).map(|_| pair("SHORT", "clue")).collect();
        // ceil(15 * 1.5) = 23, clamped to the ceiling
        assert_eq!(grid_size(&selected, 10, 20), 20);

        let selected: Vec<ClueWord> = (0..9).map(|_| pair("SHORT", "clue")).collect();
        // ceil(9 * 1.5) = 14 beats both the floor and longest + margin
        assert_eq!(grid_size(&selected, 10, 20), 14);
    }
}
