use std::fmt;
use std::str::FromStr;

use crate::ai::Difficulty;
use crate::error::ParseError;
use crate::params::Params;
use crate::score::RoundMode;

/// Who plays the right paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerMode {
    /// Left paddle is human, right paddle is the scripted opponent
    #[default]
    SinglePlayer,
    /// Both paddles are human
    TwoPlayer,
}

impl PlayerMode {
    /// Display labels for the left and right side
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            PlayerMode::SinglePlayer => ("Player", "Computer"),
            PlayerMode::TwoPlayer => ("Player 1", "Player 2"),
        }
    }
}

impl fmt::Display for PlayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerMode::SinglePlayer => f.write_str("single"),
            PlayerMode::TwoPlayer => f.write_str("multiplayer"),
        }
    }
}

impl FromStr for PlayerMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1p" => Ok(PlayerMode::SinglePlayer),
            "multiplayer" | "two" | "2p" => Ok(PlayerMode::TwoPlayer),
            _ => Err(ParseError::UnknownPlayerMode(s.to_string())),
        }
    }
}

/// Game configuration: fixed court geometry plus match selection
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub players: PlayerMode,
    pub round: RoundMode,
    pub max_score: u8,
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            players: PlayerMode::default(),
            round: RoundMode::default(),
            max_score: Params::WIN_SCORE,
            difficulty: Difficulty::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn two_player(mut self) -> Self {
        self.players = PlayerMode::TwoPlayer;
        self
    }

    pub fn timed(mut self, duration_ms: u64) -> Self {
        self.round = RoundMode::Timed { duration_ms };
        self
    }

    pub fn with_max_score(mut self, max_score: u8) -> Self {
        if max_score > 0 {
            self.max_score = max_score;
        }
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.court_width, 800.0);
        assert_eq!(config.court_height, 400.0);
        assert_eq!(config.players, PlayerMode::SinglePlayer);
        assert_eq!(config.round, RoundMode::ScoreLimit);
        assert_eq!(config.max_score, 11);
        assert_eq!(config.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new()
            .two_player()
            .timed(60_000)
            .with_max_score(0)
            .with_difficulty(Difficulty::Expert);
        assert_eq!(config.players, PlayerMode::TwoPlayer);
        assert_eq!(config.round, RoundMode::Timed { duration_ms: 60_000 });
        assert_eq!(config.max_score, 11, "Zero target is ignored");
        assert_eq!(config.difficulty, Difficulty::Expert);
    }

    #[test]
    fn test_player_mode_from_str() {
        assert_eq!("single".parse::<PlayerMode>(), Ok(PlayerMode::SinglePlayer));
        assert_eq!("Multiplayer".parse::<PlayerMode>(), Ok(PlayerMode::TwoPlayer));
        assert!("menu".parse::<PlayerMode>().is_err());
    }

    #[test]
    fn test_player_labels() {
        assert_eq!(PlayerMode::SinglePlayer.labels(), ("Player", "Computer"));
        assert_eq!(PlayerMode::TwoPlayer.labels(), ("Player 1", "Player 2"));
    }
}
