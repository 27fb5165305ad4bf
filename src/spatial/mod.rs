//! Spatial data structures for puzzle construction
//!
//! Holds the letter grid that one generation run writes into, together
//! with the bounds and neighbour helpers the placement rules rely on.

/// Letter grid storage and checked access
pub mod grid;

pub use grid::LetterGrid;
