//! Core domain: app states and fixed-tick ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loading and being validated.
    #[default]
    Boot,
    /// A level is ticking.
    Playing,
    /// A level ended and its notices are on screen.
    Notice,
}

/// Ordering inside `FixedUpdate`: sample controls, then advance the level.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Input,
    Simulate,
}
