//! UI domain: on-screen notices.

mod notice;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::notice::{despawn_notice_overlay, refresh_notice_text, spawn_notice_overlay};

pub use notice::{NoticeOverlay, NoticeText};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Notice), spawn_notice_overlay)
            .add_systems(
                Update,
                refresh_notice_text.run_if(in_state(GameState::Notice)),
            )
            .add_systems(OnExit(GameState::Notice), despawn_notice_overlay);
    }
}
