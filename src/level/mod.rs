//! Level domain: tile grids and the static geometry derived from them.

mod entities;
mod error;
mod geometry;
mod grid;


pub use entities::{EntityKind, EntitySet};
pub use error::LevelError;
pub use geometry::Hitbox;
pub use grid::{GridCell, LevelGrid, Tile};
