//! Content domain: serialized level definitions.

use serde::{Deserialize, Serialize};

use crate::level::{LevelError, LevelGrid};
use crate::run::LevelEntry;

/// Versioned wrapper around a list of definitions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    /// One string per tile row, top row first.
    pub rows: Vec<String>,
}

impl LevelDef {
    pub fn grid(&self) -> Result<LevelGrid, LevelError> {
        LevelGrid::parse(&self.rows)
    }

    /// Parse and check the grid for exactly one spawn and at most one goal.
    pub fn to_entry(&self) -> Result<LevelEntry, LevelError> {
        let grid = self.grid()?;
        grid.spawn()?;
        grid.goal()?;
        Ok(LevelEntry {
            id: self.id.clone(),
            name: self.name.clone(),
            grid,
        })
    }
}
