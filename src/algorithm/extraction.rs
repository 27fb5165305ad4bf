//! Answer normalization and clue pairing from raw source records
//!
//! Records arrive from a question source as loosely validated
//! question/answer text. Extraction is skip-not-throw: a record missing
//! either field, or whose answer normalizes outside the placeable
//! length window, is silently discarded.

use serde::{Deserialize, Serialize};

use crate::io::configuration::{MAX_WORD_LETTERS, MIN_WORD_LETTERS};
use crate::io::records::SourceRecord;

/// A placeable answer word paired with its clue text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueWord {
    /// Normalized answer, ASCII uppercase letters only
    pub word: String,
    /// Question text shown to the puzzle solver
    pub clue: String,
}

/// Extract placeable answer/clue pairs from raw records
///
/// Preserves input order and keeps duplicates. Pure function of its
/// input; invalid records are skipped rather than reported.
pub fn extract_clue_words(records: &[SourceRecord]) -> Vec<ClueWord> {
    records
        .iter()
        .filter_map(|record| {
            let clue = record.question.as_deref().map(str::trim)?;
            if clue.is_empty() {
                return None;
            }
            let word = normalize_answer(record.answer.as_deref()?)?;
            Some(ClueWord {
                word,
                clue: clue.to_string(),
            })
        })
        .collect()
}

// Letters only, uppercased; anything outside ASCII letters is removed
// so every grid cell stays a single byte.
fn normalize_answer(answer: &str) -> Option<String> {
    let word: String = answer
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|letter| letter.to_ascii_uppercase())
        .collect();

    (MIN_WORD_LETTERS..=MAX_WORD_LETTERS)
        .contains(&word.len())
        .then_some(word)
}
