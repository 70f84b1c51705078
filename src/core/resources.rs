//! Core domain: game configuration shared by every shell.

use std::path::PathBuf;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;
use crate::run::SpriteKind;

/// Immutable settings for a whole session.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Fixed simulation ticks per second.
    pub fps: u32,
    pub tile_size: f32,
    pub movement: MovementTuning,
    pub notices: NoticeDurations,
    pub palette: Palette,
    /// Treat falling below the bottom of the level as a failure. Off by
    /// default; a fall otherwise never ends the run.
    pub restart_on_fall: bool,
    /// Relative to `assets_dir`.
    pub levels_path: PathBuf,
    /// Relative to `assets_dir`.
    pub manifest_path: PathBuf,
    #[serde(skip)]
    pub assets_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Tilehop".to_string(),
            screen_width: 800,
            screen_height: 600,
            fps: 60,
            tile_size: 40.0,
            movement: MovementTuning::default(),
            notices: NoticeDurations::default(),
            palette: Palette::default(),
            restart_on_fall: false,
            levels_path: PathBuf::from("data/levels.ron"),
            manifest_path: PathBuf::from("sprites/manifest.json"),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl GameConfig {
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    pub fn asset_path(&self, relative: &std::path::Path) -> PathBuf {
        self.assets_dir.join(relative)
    }
}

/// Seconds each notice stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoticeDurations {
    pub game_over: f32,
    pub level_complete: f32,
    pub game_completed: f32,
}

impl Default for NoticeDurations {
    fn default() -> Self {
        Self {
            game_over: 2.0,
            level_complete: 2.0,
            game_completed: 3.0,
        }
    }
}

/// sRGB byte triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    pub platform: [u8; 3],
    pub hazard: [u8; 3],
    pub goal: [u8; 3],
    pub placeholder: [u8; 3],
    pub notice_text: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            platform: [100, 100, 100],
            hazard: [255, 0, 0],
            goal: [0, 255, 0],
            placeholder: [255, 255, 255],
            notice_text: [255, 0, 0],
        }
    }
}

impl Palette {
    pub fn color(rgb: [u8; 3]) -> Color {
        Color::srgb_u8(rgb[0], rgb[1], rgb[2])
    }

    /// Flat fill for a sprite that has no image.
    pub fn color_for(&self, kind: SpriteKind) -> Color {
        let rgb = match kind {
            SpriteKind::Platform => self.platform,
            SpriteKind::Hazard => self.hazard,
            SpriteKind::Goal => self.goal,
            SpriteKind::Background | SpriteKind::Player => self.placeholder,
        };
        Self::color(rgb)
    }
}
