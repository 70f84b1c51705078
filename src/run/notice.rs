//! Run domain: messages shown between level runs.

use std::time::Duration;

use crate::core::NoticeDurations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    GameOver,
    LevelComplete,
    GameCompleted,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::GameOver => "Game Over",
            Notice::LevelComplete => "Level Complete! Next",
            Notice::GameCompleted => "Game Completed!",
        }
    }

    pub fn duration(self, durations: &NoticeDurations) -> Duration {
        let secs = match self {
            Notice::GameOver => durations.game_over,
            Notice::LevelComplete => durations.level_complete,
            Notice::GameCompleted => durations.game_completed,
        };
        Duration::try_from_secs_f32(secs).unwrap_or_default()
    }
}
