//! Core crossword construction: extraction, selection, and placement

/// Answer normalization and clue pairing from raw records
pub mod extraction;
/// Generation orchestration and the fallback contract
pub mod generator;
/// Placement geometry and per-cell validity rules
pub mod placement;
/// Word selection and grid sizing
pub mod selection;
