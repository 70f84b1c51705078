//! Core domain: app states, tick ordering and configuration.

mod resources;
mod state;
mod systems;


use bevy::prelude::*;

pub use resources::{GameConfig, NoticeDurations, Palette};
pub use state::{GameState, TickSet};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                FixedUpdate,
                (TickSet::Input, TickSet::Simulate)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, systems::setup_camera);
    }
}
