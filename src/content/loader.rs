//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::builtin::builtin_levels;
use super::data::{DataFile, LevelDef};
use super::validation::{ValidationError, validate_levels};
use crate::core::GameConfig;
use crate::run::LevelEntry;

/// Error type for content loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Either the level file could not be read or its levels are unplayable.
#[derive(Debug)]
pub enum ContentError {
    Load(ContentLoadError),
    Invalid(Vec<ValidationError>),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Load(err) => write!(f, "{}", err),
            ContentError::Invalid(errors) => {
                write!(f, "{} level validation error(s)", errors.len())
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Create RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a single RON value.
pub(crate) fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct (not wrapped in DataFile).
pub(crate) fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_single(&path.display().to_string(), &contents)
}

/// Load a RON file containing a DataFile<LevelDef> wrapper.
pub fn load_levels(path: &Path) -> Result<Vec<LevelDef>, ContentLoadError> {
    let data: DataFile<LevelDef> = load_single_file(path)?;
    Ok(data.items)
}

/// Read `data/game_config.ron` under `assets_dir`. Runs before the app exists,
/// so problems go to stderr and the defaults are used.
///
/// The stored `assets_dir` is made absolute against the working directory so
/// file checks here and the asset server resolve images from the same root.
pub fn startup_config(assets_dir: &Path) -> GameConfig {
    let assets_dir = std::path::absolute(assets_dir).unwrap_or_else(|_| assets_dir.to_path_buf());
    let path = assets_dir.join("data/game_config.ron");
    let mut config = if path.exists() {
        match load_single_file::<GameConfig>(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[Tilehop] {}; using default settings", e);
                GameConfig::default()
            }
        }
    } else {
        GameConfig::default()
    };
    config.assets_dir = assets_dir;
    config
}

/// Load the configured levels file (or the built-in levels when it is
/// absent) and validate every level.
pub fn load_level_entries(config: &GameConfig) -> Result<Vec<LevelEntry>, ContentError> {
    let path = config.asset_path(&config.levels_path);
    let defs = if path.exists() {
        load_levels(&path).map_err(ContentError::Load)?
    } else {
        warn!(
            "Levels file {} not found, using built-in levels",
            path.display()
        );
        builtin_levels()
    };
    entries_from_defs(&defs)
}

pub(crate) fn entries_from_defs(defs: &[LevelDef]) -> Result<Vec<LevelEntry>, ContentError> {
    let errors = validate_levels(defs);
    if !errors.is_empty() {
        return Err(ContentError::Invalid(errors));
    }
    defs.iter()
        .map(|def| {
            def.to_entry().map_err(|error| {
                ContentError::Invalid(vec![ValidationError::Level {
                    level_id: def.id.clone(),
                    error,
                }])
            })
        })
        .collect()
}
