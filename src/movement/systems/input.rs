//! Movement domain: keyboard sampling into the tick snapshot.

use bevy::prelude::*;

use crate::movement::InputSnapshot;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputSnapshot>) {
    *input = InputSnapshot {
        left: keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]),
        right: keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]),
        jump: keyboard.any_pressed([KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp]),
        quit: keyboard.pressed(KeyCode::Escape),
    };
}
