//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick movement constants in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed while a direction is held.
    pub speed: f32,
    /// Magnitude of the upward impulse applied on jump.
    pub jump_speed: f32,
    /// Added to vertical velocity every tick.
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_speed: 12.0,
            gravity: 0.5,
        }
    }
}

impl MovementTuning {
    /// Apex height of a standing jump: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        self.jump_speed * self.jump_speed / (2.0 * self.gravity)
    }
}

/// One held control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Signal {
    Left,
    Right,
    Jump,
    Quit,
}

/// Controls held during a single tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub quit: bool,
}

impl InputSnapshot {
    pub fn from_signals<'a>(signals: impl IntoIterator<Item = &'a Signal>) -> Self {
        let mut snapshot = Self::default();
        for signal in signals {
            match signal {
                Signal::Left => snapshot.left = true,
                Signal::Right => snapshot.right = true,
                Signal::Jump => snapshot.jump = true,
                Signal::Quit => snapshot.quit = true,
            }
        }
        snapshot
    }

    /// -1, 0 or 1. Right wins when both directions are held.
    pub fn horizontal(&self) -> f32 {
        if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        }
    }
}
