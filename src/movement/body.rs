//! Movement domain: player body integration and platform resolution.

use bevy::prelude::*;

use crate::level::Hitbox;
use crate::movement::{InputSnapshot, MovementTuning};

/// The single dynamic entity of a level run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    pub hitbox: Hitbox,
    pub velocity: Vec2,
    pub grounded: bool,
}

impl PlayerBody {
    pub fn spawn_at(pos: Vec2, size: Vec2) -> Self {
        Self {
            hitbox: Hitbox::new(pos, size),
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Advance one tick against `platforms`, walked in slice order.
    pub fn step(&mut self, input: &InputSnapshot, platforms: &[Hitbox], tuning: &MovementTuning) {
        let was_grounded = self.grounded;

        self.velocity.x = input.horizontal() * tuning.speed;

        if input.jump && self.grounded {
            self.velocity.y = -tuning.jump_speed;
            self.grounded = false;
        }

        // Gravity applies even at rest; the vertical pass settles it again.
        self.velocity.y += tuning.gravity;

        self.hitbox.pos.x += self.velocity.x;
        self.resolve_horizontal(platforms);

        self.hitbox.pos.y += self.velocity.y;
        self.resolve_vertical(platforms);

        if self.grounded != was_grounded {
            debug!(
                "Player grounded={} at ({}, {})",
                self.grounded, self.hitbox.pos.x, self.hitbox.pos.y
            );
        }
    }

    fn resolve_horizontal(&mut self, platforms: &[Hitbox]) {
        let dx = self.velocity.x;
        for platform in platforms {
            if !self.hitbox.overlaps(platform) {
                continue;
            }
            if dx > 0.0 {
                self.hitbox.pos.x = platform.left() - self.hitbox.size.x;
            } else if dx < 0.0 {
                self.hitbox.pos.x = platform.right();
            }
        }
    }

    fn resolve_vertical(&mut self, platforms: &[Hitbox]) {
        let dy = self.velocity.y;
        self.grounded = false;
        for platform in platforms {
            if !self.hitbox.overlaps(platform) {
                continue;
            }
            if dy > 0.0 {
                self.hitbox.pos.y = platform.top() - self.hitbox.size.y;
                self.velocity.y = 0.0;
                self.grounded = true;
            } else if dy < 0.0 {
                self.hitbox.pos.y = platform.bottom();
                self.velocity.y = 0.0;
            }
        }
    }
}
