//! Replay domain: recorded input tapes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::{ContentLoadError, load_single_file, parse_single};
use crate::movement::{InputSnapshot, Signal};
use crate::run::session::InputSource;

/// `hold` is held for `ticks` consecutive ticks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TapeSegment {
    pub ticks: u32,
    #[serde(default)]
    pub hold: Vec<Signal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputTape {
    pub segments: Vec<TapeSegment>,
}

impl InputTape {
    pub fn load(path: &Path) -> Result<Self, ContentLoadError> {
        load_single_file(path)
    }

    pub fn parse(name: &str, contents: &str) -> Result<Self, ContentLoadError> {
        parse_single(name, contents)
    }

    pub fn total_ticks(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.ticks)).sum()
    }
}

/// Plays a tape back one tick per poll. Once the tape runs out every poll
/// holds quit.
#[derive(Debug, Clone)]
pub struct TapePlayer {
    tape: InputTape,
    segment: usize,
    used: u32,
    played: u64,
}

impl TapePlayer {
    pub fn new(tape: InputTape) -> Self {
        Self {
            tape,
            segment: 0,
            used: 0,
            played: 0,
        }
    }

    /// Ticks read from the tape so far.
    pub fn played(&self) -> u64 {
        self.played
    }

    pub fn is_exhausted(&self) -> bool {
        self.played >= self.tape.total_ticks()
    }
}

impl InputSource for TapePlayer {
    fn poll(&mut self) -> InputSnapshot {
        while let Some(segment) = self.tape.segments.get(self.segment) {
            if self.used < segment.ticks {
                self.used += 1;
                self.played += 1;
                return InputSnapshot::from_signals(&segment.hold);
            }
            self.segment += 1;
            self.used = 0;
        }
        InputSnapshot {
            quit: true,
            ..Default::default()
        }
    }
}
