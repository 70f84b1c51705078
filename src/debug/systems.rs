//! Debug domain: debug systems for hotkeys and the info overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::debug::DebugState;
use crate::debug::ui::{DebugInfoOverlay, info_text, spawn_debug_info_overlay};
use crate::run::{ActiveLevel, LevelEndedEvent, LevelOutcome, LevelSequencer};

/// Toggle the info overlay with F1
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", if debug_state.show_info { "ON" } else { "OFF" });
    }
}

/// Ctrl+N: finish the level. Ctrl+R: fail it.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut active: ResMut<ActiveLevel>,
) {
    let ctrl = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
    if !ctrl {
        return;
    }

    let outcome = if keyboard.just_pressed(KeyCode::KeyN) {
        LevelOutcome::Complete
    } else if keyboard.just_pressed(KeyCode::KeyR) {
        LevelOutcome::Restart
    } else {
        return;
    };

    let Some(runner) = active.runner.as_mut() else {
        return;
    };
    if !runner.is_running() {
        return;
    }
    runner.force_outcome(outcome);
    let msg = format!("Forced {:?}", outcome);
    info!("[DEBUG] {}", msg);
    debug_state.set_message(msg, 2.0);
}

pub(crate) fn track_level_results(
    mut ended: MessageReader<LevelEndedEvent>,
    mut debug_state: ResMut<DebugState>,
) {
    if let Some(event) = ended.read().last() {
        debug_state.last_outcome = Some(event.outcome);
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Update the debug info overlay with the current runner state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    sequencer: Res<LevelSequencer>,
    active: Res<ActiveLevel>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let Ok(mut text) = overlay_query.single_mut() {
        **text = info_text(&sequencer, active.runner.as_ref(), &debug_state);
    }
}
