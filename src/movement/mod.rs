//! Movement domain: player input and per-tick body physics.

mod body;
mod resources;
mod systems;


use bevy::prelude::*;

use crate::core::TickSet;

pub use body::PlayerBody;
pub use resources::{InputSnapshot, MovementTuning, Signal};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .add_systems(FixedUpdate, systems::read_input.in_set(TickSet::Input));
    }
}
