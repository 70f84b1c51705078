//! Sprite manifest loading and asset management.
//!
//! Loads the sprite manifest JSON which maps sprite kinds to image files.
//! Kinds without a usable image fall back to flat palette colors.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::Palette;
use crate::run::SpriteKind;

/// Resource containing all sprite definitions and their loaded textures.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of asset keys to their definitions.
    pub assets: HashMap<String, SpriteAssetDef>,
    /// Texture handles for images found on disk, keyed by asset key.
    pub textures: HashMap<String, Handle<Image>>,
}

/// Definition of a single sprite asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpriteAssetDef {
    /// Path to the image file, relative to the assets directory.
    pub path: String,
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    assets: HashMap<String, SpriteAssetDef>,
}

impl SpriteManifest {
    /// The player and background images the game ships with.
    pub fn with_defaults() -> Self {
        let assets = [
            ("player", "images/mario.png"),
            ("background", "images/background.png"),
        ]
        .into_iter()
        .map(|(key, path)| {
            (
                key.to_string(),
                SpriteAssetDef {
                    path: path.to_string(),
                },
            )
        })
        .collect();

        Self {
            version: 1,
            assets,
            textures: HashMap::new(),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        let json: ManifestJson = serde_json::from_str(contents)?;
        Ok(Self {
            version: json.version,
            assets: json.assets,
            textures: HashMap::new(),
        })
    }

    /// Load the manifest from a JSON file, falling back to the defaults.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            warn!(
                "Sprite manifest not found at {:?}, using default images",
                path
            );
            return Self::with_defaults();
        }

        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return Self::with_defaults();
            }
        };

        match Self::parse(&contents) {
            Ok(manifest) => {
                info!(
                    "Loaded sprite manifest v{} with {} assets",
                    manifest.version,
                    manifest.assets.len()
                );
                manifest
            }
            Err(e) => {
                error!("Failed to parse sprite manifest: {}", e);
                Self::with_defaults()
            }
        }
    }

    /// Start loading every image that exists under `assets_dir`. Missing
    /// files get no texture and render as placeholders.
    pub fn load_textures(&mut self, assets_dir: &Path, asset_server: &AssetServer) {
        for (key, def) in &self.assets {
            if !assets_dir.join(&def.path).exists() {
                warn!(
                    "Image {} for '{}' not found, using a placeholder",
                    def.path, key
                );
                continue;
            }
            let handle = asset_server.load(def.path.clone());
            self.textures.insert(key.clone(), handle);
        }
    }

    /// Get a texture handle for a sprite kind.
    pub fn texture(&self, kind: SpriteKind) -> Option<Handle<Image>> {
        self.textures.get(kind.asset_key()).cloned()
    }

    /// Drop the texture for `key` so its sprites fall back to placeholders.
    pub fn forget_texture(&mut self, key: &str) -> Option<Handle<Image>> {
        self.textures.remove(key)
    }

    /// Sprite for `kind` drawn at `size`.
    pub fn sprite_for(&self, kind: SpriteKind, size: Vec2, palette: &Palette) -> Sprite {
        match self.texture(kind) {
            Some(image) => Sprite {
                image,
                custom_size: Some(size),
                ..default()
            },
            None => Sprite::from_color(palette.color_for(kind), size),
        }
    }
}
