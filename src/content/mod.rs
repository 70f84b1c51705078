//! Content domain: level files, built-in levels and validation.

mod builtin;
mod data;
mod loader;
mod validation;


use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{GameConfig, GameState};
use crate::run::LevelSequencer;

pub use builtin::builtin_levels;
pub use data::{DataFile, LevelDef};
pub use loader::{
    ContentError, ContentLoadError, load_level_entries, load_levels, startup_config,
};
pub(crate) use loader::{load_single_file, parse_single};
pub use validation::{ValidationError, validate_levels};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load and validate levels, then hand them to the sequencer. Any problem is
/// fatal.
fn load_content(
    config: Res<GameConfig>,
    mut sequencer: ResMut<LevelSequencer>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    match load_level_entries(&config) {
        Ok(entries) => {
            info!(
                "Loaded {} levels: {}",
                entries.len(),
                entries
                    .iter()
                    .map(|entry| entry.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            *sequencer = LevelSequencer::new(entries);
            next_state.set(GameState::Playing);
        }
        Err(ContentError::Load(err)) => {
            error!("{}", err);
            exit.write(AppExit::error());
        }
        Err(ContentError::Invalid(errors)) => {
            for err in &errors {
                error!("Invalid level content: {}", err);
            }
            exit.write(AppExit::error());
        }
    }
}
