//! UI domain: notice text shown between level runs.

use bevy::prelude::*;

use crate::core::{GameConfig, Palette};
use crate::run::NoticeQueue;

/// Marker for the notice overlay root
#[derive(Component)]
pub struct NoticeOverlay;

/// Marker for the notice text
#[derive(Component)]
pub struct NoticeText;

pub(crate) fn spawn_notice_overlay(
    mut commands: Commands,
    config: Res<GameConfig>,
    queue: Res<NoticeQueue>,
) {
    let text = queue.current().map(|notice| notice.text()).unwrap_or_default();

    commands
        .spawn((
            NoticeOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ZIndex(100),
        ))
        .with_child((
            NoticeText,
            Text::new(text),
            TextFont {
                font_size: 72.0,
                ..default()
            },
            TextColor(Palette::color(config.palette.notice_text)),
        ));
}

/// Follow the queue as notices expire.
pub(crate) fn refresh_notice_text(
    queue: Res<NoticeQueue>,
    mut texts: Query<&mut Text, With<NoticeText>>,
) {
    if !queue.is_changed() {
        return;
    }
    let Some(notice) = queue.current() else {
        return;
    };
    for mut text in &mut texts {
        if text.0 != notice.text() {
            text.0 = notice.text().to_string();
        }
    }
}

pub(crate) fn despawn_notice_overlay(
    mut commands: Commands,
    overlays: Query<Entity, With<NoticeOverlay>>,
) {
    for entity in &overlays {
        commands.entity(entity).despawn();
    }
}
