//! Run domain: tests for the level runner, sequencer and session loop.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use super::session::{self, InputSource, Presenter, SessionEnd};
use super::{
    ActiveLevel, Frame, LevelEntry, LevelOutcome, LevelRunner, LevelSequencer, Notice,
    NoticeQueue, RunPlugin, RunnerState, SpriteKind, Step, Tick,
};
use crate::content::{ContentPlugin, builtin_levels};
use crate::core::{CorePlugin, GameConfig, GameState};
use crate::movement::MovementPlugin;
use crate::level::{EntityKind, Hitbox, LevelGrid};
use crate::movement::{InputSnapshot, Signal};

const R: &[Signal] = &[Signal::Right];
const RJ: &[Signal] = &[Signal::Right, Signal::Jump];
const NONE: &[Signal] = &[];

/// Known clear runs through the shipped levels, as (ticks, held) segments.
const LEVEL_1_RUN: &[(usize, &[Signal])] = &[
    (6, R), (6, RJ), (48, R), (6, RJ), (54, R), (6, RJ),
    (36, R), (6, RJ), (48, R), (6, RJ), (42, R),
];
const LEVEL_2_RUN: &[(usize, &[Signal])] = &[
    (36, R), (6, RJ), (18, R), (6, RJ), (54, R), (6, RJ),
    (36, R), (6, RJ), (48, R), (6, RJ), (42, R),
];
const LEVEL_3_RUN: &[(usize, &[Signal])] = &[
    (6, RJ), (36, R), (6, RJ), (42, R), (6, RJ), (48, R),
    (6, RJ), (30, NONE), (60, R), (6, RJ), (48, R),
];

fn script(segments: &[(usize, &[Signal])]) -> Vec<InputSnapshot> {
    segments
        .iter()
        .flat_map(|(ticks, held)| std::iter::repeat_n(InputSnapshot::from_signals(*held), *ticks))
        .collect()
}

fn shipped_grid(index: usize) -> LevelGrid {
    LevelGrid::parse(&builtin_levels()[index].rows).expect("shipped level parses")
}

fn shipped_entries() -> Vec<LevelEntry> {
    builtin_levels()
        .iter()
        .map(|def| def.to_entry().expect("shipped level is valid"))
        .collect()
}

fn runner_for(rows: &[&str]) -> LevelRunner {
    let grid = LevelGrid::parse(rows).expect("grid parses");
    LevelRunner::new(&grid, &GameConfig::default()).expect("runner builds")
}

/// Feeds `inputs` until the run ends; returns the outcome and the tick it
/// ended on.
fn drive(runner: &mut LevelRunner, inputs: &[InputSnapshot]) -> Option<(LevelOutcome, u64)> {
    for input in inputs {
        if let Tick::Ended(outcome) = runner.tick(input) {
            return Some((outcome, runner.ticks()));
        }
    }
    None
}

// -----------------------------------------------------------------------------
// LevelRunner tests
// -----------------------------------------------------------------------------

#[test]
fn test_runner_starts_at_spawn() {
    let runner = LevelRunner::new(&shipped_grid(0), &GameConfig::default()).unwrap();
    assert_eq!(runner.state(), RunnerState::Running);
    assert_eq!(runner.player().hitbox.pos, Vec2::new(280.0, 360.0));
    assert_eq!(runner.camera(), Vec2::ZERO);
    assert_eq!(runner.ticks(), 0);
}

#[test]
fn test_level_1_completes_moving_right() {
    let config = GameConfig::default();
    let mut runner = LevelRunner::new(&shipped_grid(0), &config).unwrap();
    let inputs = script(&[(200, RJ), (200, R)]);

    for input in &inputs {
        let hitbox = runner.player().hitbox;
        assert!(!runner.entities().touches_hazard(&hitbox));
        if let Tick::Ended(outcome) = runner.tick(input) {
            assert_eq!(outcome, LevelOutcome::Complete);
            break;
        }
    }

    assert_eq!(runner.state(), RunnerState::Completed);
    assert_eq!(runner.ticks(), 264);
    let goal = runner.entities().goal.expect("level 1 has a goal");
    assert!(runner.player().hitbox.overlaps(&goal));
}

#[test]
fn test_level_1_scripted_run_ends_on_last_tick() {
    let inputs = script(LEVEL_1_RUN);
    let mut runner = LevelRunner::new(&shipped_grid(0), &GameConfig::default()).unwrap();
    assert_eq!(
        drive(&mut runner, &inputs),
        Some((LevelOutcome::Complete, inputs.len() as u64))
    );
    assert_eq!(runner.player().hitbox.pos, Vec2::new(1600.0, 372.0));
}

#[test]
fn test_level_2_hazard_restarts_with_fresh_state() {
    let config = GameConfig::default();
    let grid = shipped_grid(1);
    let mut runner = LevelRunner::new(&grid, &config).unwrap();

    let result = drive(&mut runner, &script(&[(400, RJ)]));

    assert_eq!(result, Some((LevelOutcome::Restart, 143)));
    assert_eq!(runner.state(), RunnerState::Failed);
    let hazard = Hitbox::square(Vec2::new(1000.0, 200.0), 40.0);
    assert!(runner.player().hitbox.overlaps(&hazard));

    let rerun = LevelRunner::new(&grid, &config).unwrap();
    assert_eq!(rerun.state(), RunnerState::Running);
    assert_eq!(rerun.ticks(), 0);
    assert_eq!(rerun.player().hitbox.pos, Vec2::new(280.0, 280.0));
    assert_eq!(rerun.player().velocity, Vec2::ZERO);
    assert_eq!(rerun.entities(), runner.entities());
}

#[test]
fn test_hazard_beats_goal_on_same_tick() {
    let left = InputSnapshot::from_signals(&[Signal::Left]);

    let mut both = runner_for(&[" P ", "OF "]);
    assert_eq!(both.tick(&left), Tick::Ended(LevelOutcome::Restart));

    let mut goal_only = runner_for(&[" P ", " F "]);
    assert_eq!(goal_only.tick(&left), Tick::Ended(LevelOutcome::Complete));
}

#[test]
fn test_quit_abandons_without_outcome() {
    let mut runner = runner_for(&["P F", "XXX"]);
    let quit = InputSnapshot::from_signals(&[Signal::Quit, Signal::Right]);

    assert_eq!(runner.tick(&quit), Tick::Quit);
    assert_eq!(runner.ticks(), 0);
    assert_eq!(runner.state(), RunnerState::Running);
}

#[test]
fn test_ended_runner_stops_simulating() {
    let mut runner = runner_for(&[" P ", "OF "]);
    let left = InputSnapshot::from_signals(&[Signal::Left]);
    runner.tick(&left);
    let pos = runner.player().hitbox.pos;

    assert_eq!(runner.tick(&left), Tick::Ended(LevelOutcome::Restart));
    assert_eq!(runner.ticks(), 1);
    assert_eq!(runner.player().hitbox.pos, pos);
}

#[test]
fn test_falling_out_restarts_when_enabled() {
    let config = GameConfig {
        restart_on_fall: true,
        ..GameConfig::default()
    };
    let grid = LevelGrid::parse(&["P", " "]).unwrap();
    let mut runner = LevelRunner::new(&grid, &config).unwrap();
    assert_eq!(
        drive(&mut runner, &script(&[(100, NONE)])),
        Some((LevelOutcome::Restart, 18))
    );

    let mut shipped = LevelRunner::new(&shipped_grid(0), &config).unwrap();
    assert_eq!(
        drive(&mut shipped, &script(&[(400, R)])),
        Some((LevelOutcome::Restart, 57))
    );
}

#[test]
fn test_falling_out_keeps_running_by_default() {
    let mut runner = runner_for(&["P", " "]);
    assert_eq!(drive(&mut runner, &script(&[(100, NONE)])), None);
    assert_eq!(runner.state(), RunnerState::Running);
    assert!(runner.player().hitbox.top() > 80.0);

    let mut shipped = LevelRunner::new(&shipped_grid(0), &GameConfig::default()).unwrap();
    assert_eq!(drive(&mut shipped, &script(&[(400, R)])), None);
    assert!(shipped.player().hitbox.top() > shipped.entities().size.y);
}

#[test]
fn test_force_outcome_ends_next_tick() {
    let mut runner = runner_for(&["P F", "XXX"]);
    runner.force_outcome(LevelOutcome::Complete);
    runner.force_outcome(LevelOutcome::Restart);

    assert_eq!(runner.outcome(), Some(LevelOutcome::Complete));
    assert_eq!(
        runner.tick(&InputSnapshot::default()),
        Tick::Ended(LevelOutcome::Complete)
    );
    assert_eq!(runner.ticks(), 0);
}

// -----------------------------------------------------------------------------
// Frame tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_layout() {
    let runner = LevelRunner::new(&shipped_grid(0), &GameConfig::default()).unwrap();
    let frame = runner.frame();
    let entities = runner.entities();

    assert_eq!(frame.draws.len(), entities.platforms.len() + 1 + 2);
    let background = frame.draws[0];
    assert_eq!(background.sprite, SpriteKind::Background);
    assert_eq!(background.position, Vec2::ZERO);
    assert_eq!(background.size, Vec2::new(800.0, 600.0));

    let player = frame.draws.last().copied().unwrap();
    assert_eq!(player.sprite, SpriteKind::from(EntityKind::Player));
    assert_eq!(player.sprite, SpriteKind::Player);
    assert_eq!(player.position, Vec2::new(280.0, 360.0));
    assert_eq!(frame.draws[frame.draws.len() - 2].sprite, SpriteKind::Goal);
}

#[test]
fn test_frame_shifts_by_camera() {
    let mut runner = LevelRunner::new(&shipped_grid(1), &GameConfig::default()).unwrap();
    let slots = runner.frame().draws.len();
    drive(&mut runner, &script(&[(120, RJ)]));

    let frame: &Frame = runner.frame();
    assert!(frame.camera.x > 0.0);
    assert_eq!(frame.camera, runner.camera());
    assert_eq!(frame.draws.len(), slots);
    let player = frame.draws[slots - 1];
    assert_eq!(player.position, runner.player().hitbox.pos - frame.camera);
    let first_platform = frame.draws[1];
    assert_eq!(
        first_platform.position,
        runner.entities().platforms[0].pos - frame.camera
    );
}

// -----------------------------------------------------------------------------
// LevelSequencer tests
// -----------------------------------------------------------------------------

#[test]
fn test_sequencer_finishes_after_three_completes() {
    let mut sequencer = LevelSequencer::new(shipped_entries());
    assert_eq!(sequencer.len(), 3);

    let first = sequencer.record(LevelOutcome::Complete);
    assert_eq!(first.notices, vec![Notice::LevelComplete]);
    assert_eq!(first.step, Step::Advance(1));

    let second = sequencer.record(LevelOutcome::Complete);
    assert_eq!(second.step, Step::Advance(2));

    let last = sequencer.record(LevelOutcome::Complete);
    assert_eq!(
        last.notices,
        vec![Notice::LevelComplete, Notice::GameCompleted]
    );
    assert_eq!(last.step, Step::Finished);
    assert!(sequencer.is_finished());
    assert!(sequencer.current().is_none());

    let after = sequencer.record(LevelOutcome::Complete);
    assert!(after.notices.is_empty());
    assert_eq!(after.step, Step::Finished);
}

#[test]
fn test_sequencer_retries_same_level() {
    let mut sequencer = LevelSequencer::new(shipped_entries());
    sequencer.record(LevelOutcome::Complete);

    let progress = sequencer.record(LevelOutcome::Restart);

    assert_eq!(progress.notices, vec![Notice::GameOver]);
    assert_eq!(progress.step, Step::Retry(1));
    assert_eq!(sequencer.current_index(), 1);
    assert_eq!(sequencer.attempt(), 2);
    assert_eq!(sequencer.current().map(|e| e.id.as_str()), Some("level_2"));

    sequencer.record(LevelOutcome::Complete);
    assert_eq!(sequencer.attempt(), 1);
}

// -----------------------------------------------------------------------------
// Session tests
// -----------------------------------------------------------------------------

struct Scripted {
    inputs: std::vec::IntoIter<InputSnapshot>,
}

impl InputSource for Scripted {
    fn poll(&mut self) -> InputSnapshot {
        self.inputs.next().unwrap_or(InputSnapshot {
            quit: true,
            ..Default::default()
        })
    }
}

#[derive(Default)]
struct Recorder {
    frames: usize,
    notices: Vec<(Notice, Duration)>,
}

impl Presenter for Recorder {
    fn draw(&mut self, _frame: &Frame) {
        self.frames += 1;
    }

    fn notify(&mut self, notice: Notice, duration: Duration) {
        self.notices.push((notice, duration));
    }
}

#[test]
fn test_session_plays_all_levels_with_a_retry() {
    let mut inputs = script(LEVEL_1_RUN);
    inputs.extend(script(&[(143, RJ)]));
    inputs.extend(script(LEVEL_2_RUN));
    inputs.extend(script(LEVEL_3_RUN));
    let total = inputs.len();

    let config = GameConfig::default();
    let mut sequencer = LevelSequencer::new(shipped_entries());
    let mut source = Scripted {
        inputs: inputs.into_iter(),
    };
    let mut recorder = Recorder::default();

    let end = session::play(&mut sequencer, &config, &mut source, &mut recorder);

    assert_eq!(end, Ok(SessionEnd::Completed));
    assert!(sequencer.is_finished());
    let notices: Vec<_> = recorder.notices.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        notices,
        vec![
            Notice::LevelComplete,
            Notice::GameOver,
            Notice::LevelComplete,
            Notice::LevelComplete,
            Notice::GameCompleted,
        ]
    );
    assert_eq!(recorder.notices[4].1, Duration::from_secs(3));
    // Each attempt draws its opening frame; its ending tick draws nothing.
    assert_eq!(recorder.frames, total);
}

#[test]
fn test_session_quits_when_input_runs_out() {
    let config = GameConfig::default();
    let mut sequencer = LevelSequencer::new(shipped_entries());
    let mut source = Scripted {
        inputs: script(&[(10, R)]).into_iter(),
    };
    let mut recorder = Recorder::default();

    let end = session::play(&mut sequencer, &config, &mut source, &mut recorder);

    assert_eq!(end, Ok(SessionEnd::Quit));
    assert_eq!(sequencer.current_index(), 0);
    assert!(recorder.notices.is_empty());
}

// -----------------------------------------------------------------------------
// Notice tests
// -----------------------------------------------------------------------------

#[test]
fn test_notice_texts_and_durations() {
    let durations = GameConfig::default().notices;
    assert_eq!(Notice::GameOver.text(), "Game Over");
    assert_eq!(Notice::LevelComplete.text(), "Level Complete! Next");
    assert_eq!(Notice::GameCompleted.text(), "Game Completed!");
    assert_eq!(Notice::GameOver.duration(&durations), Duration::from_secs(2));
}

#[test]
fn test_notice_queue_shows_each_for_its_duration() {
    let mut queue = NoticeQueue::default();
    queue.push(Notice::LevelComplete, Duration::from_secs(2));
    queue.push(Notice::GameCompleted, Duration::from_secs(3));
    assert_eq!(queue.len(), 2);

    queue.tick(Duration::from_secs(1));
    assert_eq!(queue.current(), Some(Notice::LevelComplete));

    queue.tick(Duration::from_secs(1));
    assert_eq!(queue.current(), Some(Notice::GameCompleted));

    queue.tick(Duration::from_millis(2999));
    assert_eq!(queue.current(), Some(Notice::GameCompleted));

    queue.tick(Duration::from_millis(1));
    assert!(queue.is_empty());
    assert_eq!(queue.current(), None);
}

// -----------------------------------------------------------------------------
// App schedule tests
// -----------------------------------------------------------------------------

/// `(ticks, attempt)` of each runner right after `OnEnter(Playing)` built it.
#[derive(Resource, Default)]
struct StartedRuns(Vec<(u64, u32)>);

fn record_started_run(
    active: Res<ActiveLevel>,
    sequencer: Res<LevelSequencer>,
    mut started: ResMut<StartedRuns>,
) {
    if let Some(runner) = active.runner.as_ref() {
        started.0.push((runner.ticks(), sequencer.attempt()));
    }
}

/// Headless app with the game's schedule. Every update advances 100ms, which
/// is several fixed ticks.
fn setup_game_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<StartedRuns>()
        .insert_resource(GameConfig {
            assets_dir: "no-such-assets".into(),
            ..default()
        })
        .add_plugins((CorePlugin, ContentPlugin, MovementPlugin, RunPlugin))
        .add_systems(
            OnEnter(GameState::Playing),
            record_started_run.after(super::systems::start_level),
        );
    app
}

fn game_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

/// Runs updates until the app reaches `state`; returns how many it took.
fn update_until(app: &mut App, state: GameState) -> usize {
    for frame in 1..=100 {
        app.update();
        if game_state(app) == state {
            return frame;
        }
    }
    panic!("app never reached {:?}", state);
}

fn force(app: &mut App, outcome: LevelOutcome) {
    app.world_mut()
        .resource_mut::<ActiveLevel>()
        .runner
        .as_mut()
        .expect("a level is running")
        .force_outcome(outcome);
}

#[test]
fn test_app_boots_into_first_level() {
    let mut app = setup_game_app();
    update_until(&mut app, GameState::Playing);

    let sequencer = app.world().resource::<LevelSequencer>();
    assert_eq!(sequencer.len(), 3);
    assert_eq!(sequencer.current_index(), 0);
    assert_eq!(app.world().resource::<StartedRuns>().0, vec![(0, 1)]);
    assert!(!app.world().resource::<ActiveLevel>().reported);
}

#[test]
fn test_app_restart_shows_game_over_then_replays_level() {
    let mut app = setup_game_app();
    update_until(&mut app, GameState::Playing);
    force(&mut app, LevelOutcome::Restart);

    update_until(&mut app, GameState::Notice);
    // Later fixed ticks in the ending frame must not record the outcome again.
    let queue = app.world().resource::<NoticeQueue>();
    assert_eq!(queue.current(), Some(Notice::GameOver));
    assert_eq!(queue.len(), 1);
    let sequencer = app.world().resource::<LevelSequencer>();
    assert_eq!(sequencer.current_index(), 0);
    assert_eq!(sequencer.attempt(), 2);
    assert!(app.world().resource::<ActiveLevel>().reported);

    // Game over shows for two seconds.
    let frames = update_until(&mut app, GameState::Playing);
    assert!(frames >= 20);
    assert!(app.world().resource::<NoticeQueue>().is_empty());
    assert_eq!(app.world().resource::<StartedRuns>().0, vec![(0, 1), (0, 2)]);
    assert!(!app.world().resource::<ActiveLevel>().reported);
    assert_eq!(app.world().resource::<LevelSequencer>().attempt(), 2);
    assert!(app.should_exit().is_none());
}

#[test]
fn test_app_exits_after_last_level() {
    let mut app = setup_game_app();
    update_until(&mut app, GameState::Playing);
    let only_first = shipped_entries().into_iter().take(1).collect();
    *app.world_mut().resource_mut::<LevelSequencer>() = LevelSequencer::new(only_first);
    force(&mut app, LevelOutcome::Complete);

    update_until(&mut app, GameState::Notice);
    let queue = app.world().resource::<NoticeQueue>();
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.current(), Some(Notice::LevelComplete));
    assert!(app.world().resource::<LevelSequencer>().is_finished());

    let mut exit = None;
    for _ in 0..100 {
        app.update();
        exit = app.should_exit();
        if exit.is_some() {
            break;
        }
    }
    assert!(matches!(exit, Some(AppExit::Success)));
    assert_eq!(game_state(&app), GameState::Notice);
    assert_eq!(app.world().resource::<StartedRuns>().0, vec![(0, 1)]);
}
