//! Level domain: static entity set derived from a grid.

use bevy::prelude::*;

use crate::level::{GridCell, Hitbox, LevelError, LevelGrid, Tile};

/// Tag shared by everything that occupies a tile-sized box in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Platform,
    Hazard,
    Goal,
    Player,
}

/// Immutable geometry of one level run.
///
/// Platforms and hazards keep the grid's row-major order; collision passes
/// walk them in exactly this order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySet {
    pub platforms: Vec<Hitbox>,
    pub hazards: Vec<Hitbox>,
    pub goal: Option<Hitbox>,
    /// Top-left of the player's starting box.
    pub spawn: Vec2,
    /// Level size in pixels (longest row by row count).
    pub size: Vec2,
}

impl EntitySet {
    pub fn derive(grid: &LevelGrid, tile_size: f32) -> Result<Self, LevelError> {
        let spawn = grid.spawn()?;
        let goal = grid.goal()?;

        let world = |cell: GridCell| Vec2::new(cell.col as f32, cell.row as f32) * tile_size;

        let mut platforms = Vec::new();
        let mut hazards = Vec::new();
        for (cell, tile) in grid.cells() {
            match tile {
                Tile::Platform => platforms.push(Hitbox::square(world(cell), tile_size)),
                Tile::Hazard => hazards.push(Hitbox::square(world(cell), tile_size)),
                Tile::Spawn | Tile::Goal | Tile::Empty => {}
            }
        }

        Ok(Self {
            platforms,
            hazards,
            goal: goal.map(|cell| Hitbox::square(world(cell), tile_size)),
            spawn: world(spawn),
            size: Vec2::new(grid.column_count() as f32, grid.row_count() as f32) * tile_size,
        })
    }

    /// Static entities as tagged boxes: platforms, then hazards, then the goal.
    pub fn statics(&self) -> impl Iterator<Item = (EntityKind, Hitbox)> + '_ {
        let platforms = self.platforms.iter().map(|b| (EntityKind::Platform, *b));
        let hazards = self.hazards.iter().map(|b| (EntityKind::Hazard, *b));
        let goal = self.goal.iter().map(|b| (EntityKind::Goal, *b));
        platforms.chain(hazards).chain(goal)
    }

    pub fn touches_hazard(&self, hitbox: &Hitbox) -> bool {
        self.hazards.iter().any(|hazard| hitbox.overlaps(hazard))
    }

    pub fn touches_goal(&self, hitbox: &Hitbox) -> bool {
        self.goal.is_some_and(|goal| hitbox.overlaps(&goal))
    }
}
