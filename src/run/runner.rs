//! Run domain: the per-level state machine.

use bevy::prelude::*;

use crate::camera::follow_offset;
use crate::core::GameConfig;
use crate::level::{EntityKind, EntitySet, LevelError, LevelGrid};
use crate::movement::{InputSnapshot, MovementTuning, PlayerBody};
use crate::run::{DrawCommand, Frame, SpriteKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunnerState {
    #[default]
    Running,
    Failed,
    Completed,
}

/// How a level run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelOutcome {
    Complete,
    Restart,
}

/// Result of one [`LevelRunner::tick`].
#[derive(Debug, PartialEq)]
pub enum Tick<'a> {
    /// Still playing; draw this frame.
    Running(&'a Frame),
    /// Quit was held. The run is abandoned without an outcome.
    Quit,
    Ended(LevelOutcome),
}

/// Owns the entity set and the player for one attempt at one level.
#[derive(Debug, Clone)]
pub struct LevelRunner {
    entities: EntitySet,
    player: PlayerBody,
    tuning: MovementTuning,
    viewport: Vec2,
    restart_on_fall: bool,
    state: RunnerState,
    camera: Vec2,
    frame: Frame,
    ticks: u64,
}

impl LevelRunner {
    pub fn new(grid: &LevelGrid, config: &GameConfig) -> Result<Self, LevelError> {
        let entities = EntitySet::derive(grid, config.tile_size)?;
        let player = PlayerBody::spawn_at(entities.spawn, Vec2::splat(config.tile_size));
        let viewport = config.viewport();
        let camera = follow_offset(&player.hitbox, entities.size, viewport);

        let mut runner = Self {
            entities,
            player,
            tuning: config.movement,
            viewport,
            restart_on_fall: config.restart_on_fall,
            state: RunnerState::Running,
            camera,
            frame: Frame::default(),
            ticks: 0,
        };
        runner.frame = runner.compose_frame();
        Ok(runner)
    }

    /// Advance one tick. Once the run has ended every call reports the same
    /// outcome without simulating.
    pub fn tick(&mut self, input: &InputSnapshot) -> Tick<'_> {
        if let Some(outcome) = self.outcome() {
            return Tick::Ended(outcome);
        }
        if input.quit {
            return Tick::Quit;
        }

        self.ticks += 1;
        self.player.step(input, &self.entities.platforms, &self.tuning);

        let hitbox = self.player.hitbox;
        if self.entities.touches_hazard(&hitbox) {
            return self.end(RunnerState::Failed, "hit a hazard");
        }
        if self.restart_on_fall && hitbox.top() > self.entities.size.y {
            return self.end(RunnerState::Failed, "fell out of the level");
        }
        if self.entities.touches_goal(&hitbox) {
            return self.end(RunnerState::Completed, "reached the goal");
        }

        self.camera = follow_offset(&hitbox, self.entities.size, self.viewport);
        self.frame = self.compose_frame();
        Tick::Running(&self.frame)
    }

    /// End the run from outside the simulation. Ignored once already ended.
    pub fn force_outcome(&mut self, outcome: LevelOutcome) {
        if !self.is_running() {
            return;
        }
        let state = match outcome {
            LevelOutcome::Complete => RunnerState::Completed,
            LevelOutcome::Restart => RunnerState::Failed,
        };
        self.end(state, "forced");
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunnerState::Running
    }

    pub fn outcome(&self) -> Option<LevelOutcome> {
        match self.state {
            RunnerState::Running => None,
            RunnerState::Failed => Some(LevelOutcome::Restart),
            RunnerState::Completed => Some(LevelOutcome::Complete),
        }
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn entities(&self) -> &EntitySet {
        &self.entities
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    /// The latest render request.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn end(&mut self, state: RunnerState, reason: &str) -> Tick<'_> {
        self.state = state;
        info!(
            "Level run {:?} after {} ticks: {} at ({}, {})",
            state, self.ticks, reason, self.player.hitbox.pos.x, self.player.hitbox.pos.y
        );
        match self.outcome() {
            Some(outcome) => Tick::Ended(outcome),
            None => Tick::Running(&self.frame),
        }
    }

    /// Background first, statics in set order, player last; all shifted by
    /// the camera offset.
    fn compose_frame(&self) -> Frame {
        let background = DrawCommand {
            sprite: SpriteKind::Background,
            position: Vec2::ZERO,
            size: self.viewport,
        };
        let statics = self.entities.statics().map(|(kind, hitbox)| DrawCommand {
            sprite: kind.into(),
            position: hitbox.pos - self.camera,
            size: hitbox.size,
        });
        let player = DrawCommand {
            sprite: EntityKind::Player.into(),
            position: self.player.hitbox.pos - self.camera,
            size: self.player.hitbox.size,
        };

        Frame {
            camera: self.camera,
            draws: std::iter::once(background)
                .chain(statics)
                .chain(std::iter::once(player))
                .collect(),
        }
    }
}
