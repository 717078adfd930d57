//! Score keeping and round timing
//!
//! States: `Idle -> Running <-> Paused -> Over`. A round ends when either side
//! reaches the score target (in every round mode) or, in timed mode, when the
//! time budget runs out. `Over` is sticky until `reset` (or a fresh `start`).

use std::fmt;
use std::str::FromStr;

use crate::components::Side;
use crate::error::ParseError;
use crate::params::Params;

/// How a round is limited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundMode {
    /// First to the score target wins
    #[default]
    ScoreLimit,
    /// Highest score when the budget runs out wins; the score target still ends it early
    Timed { duration_ms: u64 },
}

impl RoundMode {
    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            RoundMode::ScoreLimit => None,
            RoundMode::Timed { duration_ms } => Some(*duration_ms),
        }
    }
}

impl FromStr for RoundMode {
    type Err = ParseError;

    /// Accepts `score` or `timed`; timed rounds get the default budget.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(RoundMode::ScoreLimit),
            "timed" | "time" => Ok(RoundMode::Timed {
                duration_ms: Params::ROUND_DURATION_MS,
            }),
            _ => Err(ParseError::UnknownRoundMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundState {
    #[default]
    Idle,
    Running,
    Paused,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Left,
    Right,
    Tie,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Winner::Left,
            Side::Right => Winner::Right,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Left => f.write_str("left"),
            Winner::Right => f.write_str("right"),
            Winner::Tie => f.write_str("tie"),
        }
    }
}

/// Scores, round timer and win determination
#[derive(Debug, Clone)]
pub struct ScoreKeeper {
    left: u8,
    right: u8,
    max_score: u8,
    mode: RoundMode,
    remaining_ms: Option<u64>,
    state: RoundState,
    winner: Option<Winner>,
}

impl ScoreKeeper {
    pub fn new(max_score: u8, mode: RoundMode) -> Self {
        Self {
            left: 0,
            right: 0,
            max_score: max_score.max(1),
            mode,
            remaining_ms: mode.duration_ms(),
            state: RoundState::Idle,
            winner: None,
        }
    }

    /// Begin a round. Starting from `Over` resets first. Returns false if already started.
    pub fn start(&mut self) -> bool {
        match self.state {
            RoundState::Idle => {}
            RoundState::Over => self.reset(),
            RoundState::Running | RoundState::Paused => return false,
        }
        self.state = RoundState::Running;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.state != RoundState::Running {
            return false;
        }
        self.state = RoundState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != RoundState::Paused {
            return false;
        }
        self.state = RoundState::Running;
        true
    }

    /// Award a point. Ignored once the round is over.
    pub fn record_point(&mut self, side: Side) -> Option<Winner> {
        if self.state == RoundState::Over {
            return None;
        }

        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }

        if let Some(side) = self.threshold_winner() {
            self.finish(side.into());
        }
        self.winner
    }

    /// Charge elapsed wall-clock time to a running timed round.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<Winner> {
        if self.state != RoundState::Running || self.mode.duration_ms().is_none() {
            return None;
        }
        let remaining = self.remaining_ms?.saturating_sub(elapsed_ms);
        self.remaining_ms = Some(remaining);

        if remaining == 0 {
            let winner = match self.left.cmp(&self.right) {
                std::cmp::Ordering::Greater => Winner::Left,
                std::cmp::Ordering::Less => Winner::Right,
                std::cmp::Ordering::Equal => Winner::Tie,
            };
            self.finish(winner);
        }
        self.winner
    }

    /// Back to `Idle` with zero scores and a full time budget.
    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
        self.remaining_ms = self.mode.duration_ms();
        self.state = RoundState::Idle;
        self.winner = None;
    }

    /// Change the score target and round mode. Targets refused by
    /// `accepts_target` leave the current one in place.
    ///
    /// A new time budget applies now if idle, otherwise on the next reset.
    /// Switching to `ScoreLimit` stops the clock immediately.
    pub fn configure(&mut self, max_score: u8, mode: RoundMode) {
        if self.accepts_target(max_score) {
            self.max_score = max_score;
        }
        self.mode = mode;
        if self.state == RoundState::Idle || mode.duration_ms().is_none() {
            self.remaining_ms = mode.duration_ms();
        }
    }

    /// Whether `max_score` can become the target. Zero never can, and during
    /// a round the target must stay above the leading score.
    pub fn accepts_target(&self, max_score: u8) -> bool {
        match self.state {
            RoundState::Running | RoundState::Paused => {
                max_score > self.left.max(self.right)
            }
            RoundState::Idle | RoundState::Over => max_score > 0,
        }
    }

    /// Side that has reached the score target, if any
    pub fn threshold_winner(&self) -> Option<Side> {
        if self.left >= self.max_score {
            Some(Side::Left)
        } else if self.right >= self.max_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    fn finish(&mut self, winner: Winner) {
        self.state = RoundState::Over;
        self.winner = Some(winner);
    }

    pub fn left(&self) -> u8 {
        self.left
    }

    pub fn right(&self) -> u8 {
        self.right
    }

    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn max_score(&self) -> u8 {
        self.max_score
    }

    pub fn mode(&self) -> RoundMode {
        self.mode
    }

    pub fn remaining_ms(&self) -> Option<u64> {
        self.remaining_ms
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    pub fn is_over(&self) -> bool {
        self.state == RoundState::Over
    }
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        Self::new(Params::WIN_SCORE, RoundMode::ScoreLimit)
    }
}
