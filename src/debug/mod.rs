//! Debug tools for fast iteration and testing.
//!
//! Features:
//! - F1 info overlay (level, position, velocity, grounded, camera)
//! - Ctrl+N to finish the current level
//! - Ctrl+R to fail the current level

mod state;
mod systems;
mod ui;


use bevy::prelude::*;

pub use state::DebugState;

use systems::{
    handle_debug_hotkeys, toggle_debug_info, track_level_results, update_debug_info_overlay,
    update_status_message,
};

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_info,
                handle_debug_hotkeys,
                track_level_results,
                update_status_message,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
