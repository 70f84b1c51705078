//! Run domain: render requests handed to a presentation layer.

use bevy::prelude::*;

use crate::level::EntityKind;

/// What a draw command shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Background,
    Platform,
    Hazard,
    Goal,
    Player,
}

impl SpriteKind {
    /// Key into the sprite manifest.
    pub fn asset_key(self) -> &'static str {
        match self {
            SpriteKind::Background => "background",
            SpriteKind::Platform => "platform",
            SpriteKind::Hazard => "hazard",
            SpriteKind::Goal => "goal",
            SpriteKind::Player => "player",
        }
    }

    /// Z layer; later layers draw over earlier ones.
    pub fn depth(self) -> f32 {
        match self {
            SpriteKind::Background => 0.0,
            SpriteKind::Platform | SpriteKind::Hazard | SpriteKind::Goal => 1.0,
            SpriteKind::Player => 2.0,
        }
    }
}

impl From<EntityKind> for SpriteKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Platform => SpriteKind::Platform,
            EntityKind::Hazard => SpriteKind::Hazard,
            EntityKind::Goal => SpriteKind::Goal,
            EntityKind::Player => SpriteKind::Player,
        }
    }
}

/// One image placed on screen. `position` is the top-left corner in screen
/// pixels (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteKind,
    pub position: Vec2,
    pub size: Vec2,
}

/// Everything to draw for one tick. The draw list has the same length and
/// kinds for every frame of a level run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub camera: Vec2,
    pub draws: Vec<DrawCommand>,
}
