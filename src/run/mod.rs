//! Run domain: level runner, sequencer and the loops that drive them.
//!
//! The runner and sequencer are plain types so both the windowed app and the
//! headless replay shell share them. The systems here wire them into the app
//! schedule.

mod events;
mod frame;
mod notice;
mod resources;
mod runner;
mod sequencer;
pub mod session;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::{GameState, TickSet};

pub use events::{LevelEndedEvent, LevelStartedEvent};
pub use frame::{DrawCommand, Frame, SpriteKind};
pub use notice::Notice;
pub use resources::{ActiveLevel, NoticeQueue, PendingNotice};
pub use runner::{LevelOutcome, LevelRunner, RunnerState, Tick};
pub use sequencer::{LevelEntry, LevelSequencer, Progress, Step};

pub struct RunPlugin;

impl Plugin for RunPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelSequencer>()
            .init_resource::<ActiveLevel>()
            .init_resource::<NoticeQueue>()
            .add_message::<LevelStartedEvent>()
            .add_message::<LevelEndedEvent>()
            .add_systems(OnEnter(GameState::Playing), systems::start_level)
            .add_systems(FixedUpdate, systems::tick_level.in_set(TickSet::Simulate))
            .add_systems(
                Update,
                (
                    systems::advance_notices.run_if(in_state(GameState::Notice)),
                    systems::log_level_results,
                ),
            );
    }
}
