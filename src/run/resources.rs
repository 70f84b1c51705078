//! Run domain: ECS resources wrapping the active level and pending notices.

use std::collections::VecDeque;
use std::time::Duration;

use bevy::prelude::*;

use crate::run::{Frame, LevelRunner, Notice};

/// The runner for the level being played, if any.
#[derive(Resource, Debug, Default)]
pub struct ActiveLevel {
    pub runner: Option<LevelRunner>,
    /// Set once the runner's outcome has been handed to the sequencer.
    pub reported: bool,
}

impl ActiveLevel {
    pub fn start(&mut self, runner: LevelRunner) {
        self.runner = Some(runner);
        self.reported = false;
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.runner.as_ref().map(LevelRunner::frame)
    }
}

#[derive(Debug, Clone)]
pub struct PendingNotice {
    pub notice: Notice,
    pub timer: Timer,
}

/// Notices waiting to be shown, front first. Each one stays up until its
/// timer finishes.
#[derive(Resource, Debug, Default)]
pub struct NoticeQueue {
    pending: VecDeque<PendingNotice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice, duration: Duration) {
        self.pending.push_back(PendingNotice {
            notice,
            timer: Timer::new(duration, TimerMode::Once),
        });
    }

    pub fn current(&self) -> Option<Notice> {
        self.pending.front().map(|pending| pending.notice)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Advance the front notice, dropping it once its time is up. Time left
    /// over is not carried into the next notice.
    pub fn tick(&mut self, delta: Duration) {
        let Some(front) = self.pending.front_mut() else {
            return;
        };
        front.timer.tick(delta);
        if front.timer.is_finished() {
            self.pending.pop_front();
        }
    }
}
