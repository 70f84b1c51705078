//! Sprites domain: mirrors the active level's frame onto ECS sprites.

use bevy::asset::LoadState;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameConfig;
use crate::run::{ActiveLevel, DrawCommand, LevelStartedEvent, SpriteKind};
use crate::sprites::SpriteManifest;

/// One draw slot of the active level's frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct LevelSprite {
    pub slot: usize,
    pub kind: SpriteKind,
}

/// Converts a top-left, y-down screen rect into the center of a sprite seen
/// by a camera sitting at the world origin.
pub fn screen_to_world(draw: &DrawCommand, viewport: Vec2) -> Vec3 {
    let center = draw.position + draw.size * 0.5;
    Vec3::new(
        center.x - viewport.x * 0.5,
        viewport.y * 0.5 - center.y,
        draw.sprite.depth(),
    )
}

pub(crate) fn load_sprite_manifest(
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut manifest: ResMut<SpriteManifest>,
) {
    *manifest = SpriteManifest::load_from_file(&config.asset_path(&config.manifest_path));
    manifest.load_textures(&config.assets_dir, &asset_server);
}

/// Replace the previous level's sprites with one per draw slot.
pub(crate) fn spawn_level_sprites(
    mut commands: Commands,
    mut started: MessageReader<LevelStartedEvent>,
    config: Res<GameConfig>,
    manifest: Res<SpriteManifest>,
    active: Res<ActiveLevel>,
    existing: Query<Entity, With<LevelSprite>>,
) {
    let Some(event) = started.read().last() else {
        return;
    };
    let Some(frame) = active.frame() else {
        return;
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let viewport = config.viewport();
    for (slot, draw) in frame.draws.iter().enumerate() {
        commands.spawn((
            LevelSprite {
                slot,
                kind: draw.sprite,
            },
            manifest.sprite_for(draw.sprite, draw.size, &config.palette),
            Transform::from_translation(screen_to_world(draw, viewport)),
        ));
    }
    debug!(
        "Spawned {} sprites for level {} '{}' (attempt {})",
        frame.draws.len(),
        event.index + 1,
        event.id,
        event.attempt
    );
}

pub(crate) fn sync_level_sprites(
    config: Res<GameConfig>,
    active: Res<ActiveLevel>,
    mut sprites: Query<(&LevelSprite, &mut Transform)>,
) {
    let Some(frame) = active.frame() else {
        return;
    };
    let viewport = config.viewport();
    for (sprite, mut transform) in &mut sprites {
        if let Some(draw) = frame.draws.get(sprite.slot) {
            transform.translation = screen_to_world(draw, viewport);
        }
    }
}

/// Images that fail to decode are swapped for placeholders.
pub(crate) fn swap_failed_images(
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut manifest: ResMut<SpriteManifest>,
    mut sprites: Query<(&LevelSprite, &mut Sprite)>,
) {
    let failed: Vec<String> = manifest
        .textures
        .iter()
        .filter(|(_, handle)| {
            matches!(
                asset_server.get_load_state(handle.id()),
                Some(LoadState::Failed(_))
            )
        })
        .map(|(key, _)| key.clone())
        .collect();

    for key in failed {
        warn!("Image for '{}' failed to load, using a placeholder", key);
        manifest.forget_texture(&key);
        for (level_sprite, mut sprite) in &mut sprites {
            if level_sprite.kind.asset_key() != key {
                continue;
            }
            let size = sprite.custom_size.unwrap_or(Vec2::splat(config.tile_size));
            *sprite = manifest.sprite_for(level_sprite.kind, size, &config.palette);
        }
    }
}
