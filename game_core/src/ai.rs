//! Scripted opponent
//!
//! A deterministic reactive heuristic: chase the ball's height while it
//! approaches, drift back to mid-court while it recedes. The dead zone is
//! what keeps it beatable.

use std::fmt;
use std::str::FromStr;

use crate::components::{Ball, Paddle, Side};
use crate::error::ParseError;
use crate::params::Params;

/// Opponent skill tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Paddle speed while tracking, pixels per tick
    pub fn tracking_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 3.0,
            Difficulty::Hard => 4.0,
            Difficulty::Expert => 5.0,
        }
    }

    /// Half-height of the band around the ball inside which the paddle holds still
    pub fn dead_zone(self) -> f32 {
        match self {
            Difficulty::Easy => 50.0,
            Difficulty::Medium => 35.0,
            Difficulty::Hard => 25.0,
            Difficulty::Expert => 15.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownDifficulty(s.to_string()))
    }
}

/// Decides a computer paddle's vertical velocity each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpponentController {
    difficulty: Difficulty,
}

impl OpponentController {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Signed vertical velocity for `paddle` (positive = down).
    pub fn decide(&self, paddle: &Paddle, ball: &Ball, court_height: f32) -> f32 {
        let speed = self.difficulty.tracking_speed();
        let center = paddle.center();

        let approaching = match paddle.side {
            Side::Right => ball.vel.x > 0.0,
            Side::Left => ball.vel.x < 0.0,
        };

        if approaching {
            steer(center, ball.pos.y, self.difficulty.dead_zone(), speed)
        } else {
            steer(
                center,
                court_height / 2.0,
                Params::AI_RECENTER_DEAD_ZONE,
                speed * Params::AI_RECENTER_FACTOR,
            )
        }
    }
}

fn steer(from: f32, target: f32, dead_zone: f32, speed: f32) -> f32 {
    if from < target - dead_zone {
        speed
    } else if from > target + dead_zone {
        -speed
    } else {
        0.0
    }
}
