//! Run domain: messages for level lifecycle.

use bevy::ecs::message::Message;

use crate::run::LevelOutcome;

/// A fresh runner was built for a level.
#[derive(Debug, Clone)]
pub struct LevelStartedEvent {
    pub index: usize,
    pub id: String,
    pub attempt: u32,
}

impl Message for LevelStartedEvent {}

/// A level run reached an outcome.
#[derive(Debug, Clone)]
pub struct LevelEndedEvent {
    pub index: usize,
    pub outcome: LevelOutcome,
    pub ticks: u64,
}

impl Message for LevelEndedEvent {}
