//! Record input and puzzle document output as JSON
//!
//! Record files are JSON arrays of question/answer objects. Both fields
//! are optional at parse time; extraction decides what is usable, so a
//! partially malformed file still yields a puzzle from its valid
//! records.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::algorithm::extraction::ClueWord;
use crate::algorithm::generator::Puzzle;
use crate::algorithm::placement::PlacedWord;
use crate::io::error::{PuzzleError, Result};

/// One raw question/answer record as supplied by the question source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Question text; records without one are skipped
    #[serde(default)]
    pub question: Option<String>,
    /// Answer text; records without one are skipped
    #[serde(default)]
    pub answer: Option<String>,
}

impl SourceRecord {
    /// Convenience constructor for fully populated records
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }
}

/// Load source records from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array
/// of records.
pub fn load_records(path: &Path) -> Result<Vec<SourceRecord>> {
    let contents = std::fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| PuzzleError::RecordParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializable rendition of a finished puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    /// Grid side length
    pub size: usize,
    /// Grid rows, `.` marking empty cells
    pub grid: Vec<String>,
    /// Placed words with clues and start cells
    pub words: Vec<PlacedWord>,
    /// Selected words that found no valid placement
    pub dropped: Vec<ClueWord>,
}

impl PuzzleDocument {
    /// Build the export document for a finished puzzle
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self {
            size: puzzle.size,
            grid: puzzle.grid.row_strings(),
            words: puzzle.words.clone(),
            dropped: puzzle.dropped.clone(),
        }
    }
}

/// Write a puzzle document as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn write_puzzle(path: &Path, document: &PuzzleDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|source| PuzzleError::DocumentEncode { source })?;

    std::fs::write(path, json).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{PuzzleDocument, SourceRecord, load_records, write_puzzle};
    use crate::algorithm::generator::fallback_puzzle;
    use std::io::Write;

    #[test]
    fn test_records_parse_with_missing_fields() -> Result<(), serde_json::Error> {
        let json = r#"[
            {"question": "Q1", "answer": "alpha"},
            {"question": "Q2"},
            {"answer": "beta"},
            {}
        ]"#;
        let records: Vec<SourceRecord> = serde_json::from_str(json)?;
        assert_eq!(records.len(), 4);
        assert!(records.first().is_some_and(|record| {
            record.question.as_deref() == Some("Q1") && record.answer.as_deref() == Some("alpha")
        }));
        assert!(records.last().is_some_and(|record| {
            record.question.is_none() && record.answer.is_none()
        }));
        Ok(())
    }

    #[test]
    fn test_document_mirrors_puzzle() {
        let puzzle = fallback_puzzle();
        let document = PuzzleDocument::from_puzzle(&puzzle);
        assert_eq!(document.size, puzzle.size);
        assert_eq!(document.grid.len(), puzzle.size);
        assert!(document.grid.iter().all(|row| row.len() == puzzle.size));
        assert_eq!(document.words.len(), puzzle.words.len());
    }

    #[test]
    fn test_document_round_trips_through_json() -> Result<(), serde_json::Error> {
        let document = PuzzleDocument::from_puzzle(&fallback_puzzle());
        let json = serde_json::to_string(&document)?;
        assert!(json.contains("\"across\""));
        assert!(json.contains("\"down\""));
        let parsed: PuzzleDocument = serde_json::from_str(&json)?;
        assert_eq!(parsed, document);
        Ok(())
    }

    #[test]
    fn test_load_and_write_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;

        let records_path = dir.path().join("records.json");
        let mut file = std::fs::File::create(&records_path)?;
        writeln!(file, r#"[{{"question": "Q", "answer": "alpha"}}]"#)?;
        let records = load_records(&records_path)?;
        assert_eq!(records.len(), 1);

        let puzzle_path = dir.path().join("records_puzzle.json");
        write_puzzle(&puzzle_path, &PuzzleDocument::from_puzzle(&fallback_puzzle()))?;
        assert!(puzzle_path.exists());
        Ok(())
    }

    #[test]
    fn test_load_rejects_malformed_json() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json")?;
        assert!(load_records(&path).is_err());
        Ok(())
    }
}
