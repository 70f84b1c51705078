//! Run domain: ordering of levels across a session.

use bevy::prelude::*;

use crate::level::LevelGrid;
use crate::run::{LevelOutcome, Notice};

/// A validated level ready to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    pub id: String,
    pub name: String,
    pub grid: LevelGrid,
}

/// What the session does next after a recorded outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Replay the level at this index from scratch.
    Retry(usize),
    /// Play the level at this index.
    Advance(usize),
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Notices to show, in order.
    pub notices: Vec<Notice>,
    pub step: Step,
}

/// Owns the ordered levels and the current position. Nothing created for a
/// single run lives here.
#[derive(Resource, Debug, Clone)]
pub struct LevelSequencer {
    levels: Vec<LevelEntry>,
    index: usize,
    attempt: u32,
}

impl Default for LevelSequencer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LevelSequencer {
    pub fn new(levels: Vec<LevelEntry>) -> Self {
        Self {
            levels,
            index: 0,
            attempt: 1,
        }
    }

    /// The level to play, or `None` once every level is complete.
    pub fn current(&self) -> Option<&LevelEntry> {
        self.levels.get(self.index)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.levels.len()
    }

    /// 1-based attempt number on the current level.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn record(&mut self, outcome: LevelOutcome) -> Progress {
        if self.is_finished() {
            return Progress {
                notices: Vec::new(),
                step: Step::Finished,
            };
        }

        match outcome {
            LevelOutcome::Restart => {
                self.attempt += 1;
                info!(
                    "Restarting level {} (attempt {})",
                    self.index + 1,
                    self.attempt
                );
                Progress {
                    notices: vec![Notice::GameOver],
                    step: Step::Retry(self.index),
                }
            }
            LevelOutcome::Complete => {
                info!("Level {} complete", self.index + 1);
                self.index += 1;
                self.attempt = 1;
                if self.is_finished() {
                    info!("All {} levels completed", self.levels.len());
                    Progress {
                        notices: vec![Notice::LevelComplete, Notice::GameCompleted],
                        step: Step::Finished,
                    }
                } else {
                    Progress {
                        notices: vec![Notice::LevelComplete],
                        step: Step::Advance(self.index),
                    }
                }
            }
        }
    }
}
