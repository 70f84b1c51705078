//! Sprites module: image manifest and the ECS view of the active level.
//!
//! This module handles:
//! - Loading the sprite manifest from JSON
//! - Placeholder fallback for missing or broken images
//! - Spawning and positioning one sprite per frame draw slot

pub mod manifest;
pub mod sync;


use bevy::prelude::*;

use crate::core::GameState;

pub use manifest::*;
pub use sync::{LevelSprite, screen_to_world};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_systems(Startup, sync::load_sprite_manifest)
            .add_systems(
                Update,
                (
                    sync::spawn_level_sprites,
                    sync::sync_level_sprites,
                    sync::swap_failed_images,
                )
                    .chain()
                    .run_if(not(in_state(GameState::Boot))),
            );
    }
}
