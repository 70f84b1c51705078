//! Run domain: blocking session loop for shells without an ECS schedule.

use std::time::Duration;

use crate::core::GameConfig;
use crate::level::LevelError;
use crate::movement::InputSnapshot;
use crate::run::{Frame, LevelRunner, LevelSequencer, Notice, Tick};

/// Produces the held controls for each tick.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

/// Receives render requests and notices. `notify` may block for `duration`.
pub trait Presenter {
    fn draw(&mut self, frame: &Frame);
    fn notify(&mut self, notice: Notice, duration: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    Quit,
}

/// Play from the sequencer's current level until every level is complete or
/// quit is held.
pub fn play(
    sequencer: &mut LevelSequencer,
    config: &GameConfig,
    input: &mut impl InputSource,
    presenter: &mut impl Presenter,
) -> Result<SessionEnd, LevelError> {
    while let Some(entry) = sequencer.current() {
        let mut runner = LevelRunner::new(&entry.grid, config)?;
        presenter.draw(runner.frame());

        let outcome = loop {
            match runner.tick(&input.poll()) {
                Tick::Running(frame) => presenter.draw(frame),
                Tick::Quit => return Ok(SessionEnd::Quit),
                Tick::Ended(outcome) => break outcome,
            }
        };

        for notice in sequencer.record(outcome).notices {
            presenter.notify(notice, notice.duration(&config.notices));
        }
    }
    Ok(SessionEnd::Completed)
}
