//! Level domain: axis-aligned boxes in world pixels.

use bevy::prelude::*;

/// Axis-aligned box in world pixels.
///
/// `pos` is the top-left corner and y grows downward, matching the row order
/// of a level grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
