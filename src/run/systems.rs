//! Run domain: systems that drive the level runner inside the app schedule.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{GameConfig, GameState, NoticeDurations};
use crate::movement::InputSnapshot;
use crate::run::{
    ActiveLevel, LevelEndedEvent, LevelOutcome, LevelRunner, LevelSequencer, LevelStartedEvent,
    NoticeQueue, Tick,
};

/// Build a fresh runner for the sequencer's current level.
pub(crate) fn start_level(
    config: Res<GameConfig>,
    sequencer: Res<LevelSequencer>,
    mut active: ResMut<ActiveLevel>,
    mut started: MessageWriter<LevelStartedEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(entry) = sequencer.current() else {
        warn!("Entered Playing with no level left to play");
        exit.write(AppExit::Success);
        return;
    };

    match LevelRunner::new(&entry.grid, &config) {
        Ok(runner) => {
            info!(
                "Starting level {}/{} '{}' (attempt {})",
                sequencer.current_index() + 1,
                sequencer.len(),
                entry.name,
                sequencer.attempt()
            );
            active.start(runner);
            started.write(LevelStartedEvent {
                index: sequencer.current_index(),
                id: entry.id.clone(),
                attempt: sequencer.attempt(),
            });
        }
        Err(err) => {
            error!("Level '{}' cannot be played: {}", entry.id, err);
            exit.write(AppExit::error());
        }
    }
}

/// One fixed tick of the active level.
pub(crate) fn tick_level(
    input: Res<InputSnapshot>,
    config: Res<GameConfig>,
    mut active: ResMut<ActiveLevel>,
    mut sequencer: ResMut<LevelSequencer>,
    mut queue: ResMut<NoticeQueue>,
    mut next_state: ResMut<NextState<GameState>>,
    mut ended: MessageWriter<LevelEndedEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    // FixedUpdate may run again before the state change lands.
    if active.reported {
        return;
    }
    let Some(runner) = active.runner.as_mut() else {
        return;
    };

    let outcome = match runner.tick(&input) {
        Tick::Running(_) => return,
        Tick::Quit => {
            info!("Quit requested");
            exit.write(AppExit::Success);
            return;
        }
        Tick::Ended(outcome) => outcome,
    };
    let ticks = runner.ticks();
    active.reported = true;

    ended.write(LevelEndedEvent {
        index: sequencer.current_index(),
        outcome,
        ticks,
    });
    finish_level(
        outcome,
        &mut sequencer,
        &mut queue,
        &config.notices,
        &mut next_state,
    );
}

/// Record `outcome`, queue its notices and switch to the notice screen.
pub(crate) fn finish_level(
    outcome: LevelOutcome,
    sequencer: &mut LevelSequencer,
    queue: &mut NoticeQueue,
    durations: &NoticeDurations,
    next_state: &mut NextState<GameState>,
) {
    let progress = sequencer.record(outcome);
    for notice in progress.notices {
        queue.push(notice, notice.duration(durations));
    }
    next_state.set(GameState::Notice);
}

/// Count down the front notice; leave the notice screen once all are shown.
pub(crate) fn advance_notices(
    time: Res<Time>,
    sequencer: Res<LevelSequencer>,
    mut queue: ResMut<NoticeQueue>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    queue.tick(time.delta());
    if !queue.is_empty() {
        return;
    }

    if sequencer.is_finished() {
        info!("Session complete, exiting");
        exit.write(AppExit::Success);
    } else {
        next_state.set(GameState::Playing);
    }
}

pub(crate) fn log_level_results(mut ended: MessageReader<LevelEndedEvent>) {
    for event in ended.read() {
        info!(
            "Level {} ended with {:?} after {} ticks",
            event.index + 1,
            event.outcome,
            event.ticks
        );
    }
}
