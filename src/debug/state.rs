//! Debug domain: state for debug tooling.

use bevy::prelude::*;

use crate::run::LevelOutcome;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay (position, velocity, camera) is shown
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
    /// Outcome of the most recent level run
    pub last_outcome: Option<LevelOutcome>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message, clearing it when time runs out
    pub fn tick_message(&mut self, delta_secs: f32) {
        if let Some((_, ref mut remaining)) = self.status_message {
            *remaining -= delta_secs;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }
}
