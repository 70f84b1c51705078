//! Level domain: errors raised while reading a level grid.

use crate::level::GridCell;

/// A level grid that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The grid has no rows at all.
    EmptyGrid,
    /// A character outside the tile alphabet.
    UnknownTile { cell: GridCell, glyph: char },
    /// No `P` tile, so the player has nowhere to start.
    MissingSpawn,
    DuplicateSpawn { first: GridCell, second: GridCell },
    DuplicateGoal { first: GridCell, second: GridCell },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::EmptyGrid => write!(f, "level grid has no rows"),
            LevelError::UnknownTile { cell, glyph } => {
                write!(f, "unknown tile {:?} at {}", glyph, cell)
            }
            LevelError::MissingSpawn => write!(f, "level has no player spawn ('P') tile"),
            LevelError::DuplicateSpawn { first, second } => write!(
                f,
                "second player spawn at {} (first one at {})",
                second, first
            ),
            LevelError::DuplicateGoal { first, second } => {
                write!(f, "second goal at {} (first one at {})", second, first)
            }
        }
    }
}

impl std::error::Error for LevelError {}
