//! Level domain: character grids and tile classification.

use std::fmt;

use crate::level::LevelError;

/// Semantic role of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Platform,
    Hazard,
    Spawn,
    Goal,
}

impl Tile {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            ' ' => Some(Tile::Empty),
            'X' => Some(Tile::Platform),
            'O' => Some(Tile::Hazard),
            'P' => Some(Tile::Spawn),
            'F' | 'G' => Some(Tile::Goal),
            _ => None,
        }
    }
}

/// Zero-based (row, column) address of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.col)
    }
}

/// Rectangular tile grid. Rows may differ in length; cells past the end of a
/// short row read as [`Tile::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    rows: Vec<Vec<Tile>>,
}

impl LevelGrid {
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, LevelError> {
        if rows.is_empty() {
            return Err(LevelError::EmptyGrid);
        }

        let mut parsed = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let tiles = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(col, glyph)| {
                    Tile::from_glyph(glyph).ok_or(LevelError::UnknownTile {
                        cell: GridCell::new(row, col),
                        glyph,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            parsed.push(tiles);
        }

        Ok(Self { rows: parsed })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the longest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn tile(&self, cell: GridCell) -> Tile {
        self.rows
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .unwrap_or_default()
    }

    /// Every stored cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (GridCell, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, tile)| (GridCell::new(row, col), *tile))
        })
    }

    /// The single spawn cell.
    pub fn spawn(&self) -> Result<GridCell, LevelError> {
        self.unique(Tile::Spawn, |first, second| LevelError::DuplicateSpawn {
            first,
            second,
        })?
        .ok_or(LevelError::MissingSpawn)
    }

    /// The goal cell, if the level has one.
    pub fn goal(&self) -> Result<Option<GridCell>, LevelError> {
        self.unique(Tile::Goal, |first, second| LevelError::DuplicateGoal {
            first,
            second,
        })
    }

    fn unique(
        &self,
        wanted: Tile,
        duplicate: impl Fn(GridCell, GridCell) -> LevelError,
    ) -> Result<Option<GridCell>, LevelError> {
        let mut found = None;
        for (cell, tile) in self.cells() {
            if tile != wanted {
                continue;
            }
            if let Some(first) = found {
                return Err(duplicate(first, cell));
            }
            found = Some(cell);
        }
        Ok(found)
    }
}
