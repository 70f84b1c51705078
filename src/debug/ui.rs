//! Debug domain: info overlay.

use bevy::prelude::*;

use crate::debug::DebugState;
use crate::run::{LevelRunner, LevelSequencer};

/// Marker for the debug info overlay
#[derive(Component)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Overlay text for the current level and runner.
pub(crate) fn info_text(
    sequencer: &LevelSequencer,
    runner: Option<&LevelRunner>,
    debug_state: &DebugState,
) -> String {
    let level = match sequencer.current() {
        Some(entry) => format!(
            "Level: {}/{} {} (attempt {})",
            sequencer.current_index() + 1,
            sequencer.len(),
            entry.name,
            sequencer.attempt()
        ),
        None => "Level: done".to_string(),
    };

    let mut lines = vec![level];
    if let Some(runner) = runner {
        let player = runner.player();
        lines.push(format!(
            "Pos: ({:.1}, {:.1})",
            player.hitbox.pos.x, player.hitbox.pos.y
        ));
        lines.push(format!(
            "Vel: ({:.1}, {:.1})",
            player.velocity.x, player.velocity.y
        ));
        lines.push(format!("Grounded: {}", player.grounded));
        lines.push(format!("Jump height: {:.0}px", runner.tuning().jump_height()));
        lines.push(format!(
            "Camera: ({:.0}, {:.0})",
            runner.camera().x,
            runner.camera().y
        ));
        lines.push(format!("Tick: {} {:?}", runner.ticks(), runner.state()));
    }
    if let Some(outcome) = debug_state.last_outcome {
        lines.push(format!("Last: {:?}", outcome));
    }
    if let Some((message, _)) = &debug_state.status_message {
        lines.push(message.clone());
    }
    lines.join("\n")
}
