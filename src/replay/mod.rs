//! Replay domain: headless playback of recorded input tapes.
//!
//! `--replay <tape.ron>` runs the whole level sequence against a tape without
//! a window. The process exits successfully only if the tape completes every
//! level.

mod tape;


use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::ecs::message::MessageWriter;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::content::{ContentError, load_level_entries};
use crate::core::GameConfig;
use crate::run::session::{self, Presenter, SessionEnd};
use crate::run::{Frame, LevelSequencer, Notice};

pub use tape::{InputTape, TapePlayer, TapeSegment};

#[derive(Resource, Debug, Clone)]
struct ReplayRequest {
    path: PathBuf,
}

/// Run a headless app that replays `path` and exits.
pub fn run(config: GameConfig, path: PathBuf) -> AppExit {
    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(config)
        .insert_resource(ReplayRequest { path })
        .add_systems(Startup, run_replay)
        .run()
}

fn run_replay(
    config: Res<GameConfig>,
    request: Res<ReplayRequest>,
    mut exit: MessageWriter<AppExit>,
) {
    exit.write(replay_session(&config, &request.path));
}

/// Logs notices instead of showing them; never waits.
#[derive(Debug, Default)]
pub struct LogPresenter {
    pub frames: u64,
    pub notices: Vec<Notice>,
}

impl Presenter for LogPresenter {
    fn draw(&mut self, _frame: &Frame) {
        self.frames += 1;
    }

    fn notify(&mut self, notice: Notice, duration: Duration) {
        info!(
            "Notice: {} ({:.1}s, frame {})",
            notice.text(),
            duration.as_secs_f32(),
            self.frames
        );
        self.notices.push(notice);
    }
}

/// Play every level against the tape at `path`.
pub fn replay_session(config: &GameConfig, path: &Path) -> AppExit {
    let entries = match load_level_entries(config) {
        Ok(entries) => entries,
        Err(ContentError::Load(err)) => {
            error!("{}", err);
            return AppExit::error();
        }
        Err(ContentError::Invalid(errors)) => {
            for err in &errors {
                error!("Invalid level content: {}", err);
            }
            return AppExit::error();
        }
    };

    let tape = match InputTape::load(path) {
        Ok(tape) => tape,
        Err(err) => {
            error!("{}", err);
            return AppExit::error();
        }
    };
    info!(
        "Replaying {} ticks from {}",
        tape.total_ticks(),
        path.display()
    );

    let mut sequencer = LevelSequencer::new(entries);
    let mut input = TapePlayer::new(tape);
    let mut presenter = LogPresenter::default();

    match session::play(&mut sequencer, config, &mut input, &mut presenter) {
        Ok(SessionEnd::Completed) => {
            info!(
                "Replay completed all {} levels in {} ticks",
                sequencer.len(),
                input.played()
            );
            if !input.is_exhausted() {
                warn!("Replay finished with unused tape left");
            }
            AppExit::Success
        }
        Ok(SessionEnd::Quit) => {
            warn!(
                "Tape ran out on level {} after {} ticks",
                sequencer.current_index() + 1,
                input.played()
            );
            AppExit::error()
        }
        Err(err) => {
            error!("Level cannot be played: {}", err);
            AppExit::error()
        }
    }
}
