//! Camera domain: viewport offset that follows the player.

use bevy::prelude::*;

use crate::level::Hitbox;


/// Offset of the viewport's top-left corner in world pixels.
///
/// Centers `target` where the level allows it. Each axis is clamped to
/// `[0, level - viewport]`; a level narrower than the viewport pins to 0.
pub fn follow_offset(target: &Hitbox, level_size: Vec2, viewport: Vec2) -> Vec2 {
    let ideal = target.center() - viewport * 0.5;
    let max = level_size - viewport;
    Vec2::new(ideal.x.min(max.x).max(0.0), ideal.y.min(max.y).max(0.0))
}
