use crate::components::{Ball, Paddle};
use crate::resources::Events;
use crate::score::{RoundState, Winner};

/// Read-only view of the game after a tick, handed to renderers and audio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub state: RoundState,
    /// A round has been started and not yet finished (true while paused)
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub left_score: u8,
    pub right_score: u8,
    pub max_score: u8,
    /// Present only for timed rounds
    pub time_remaining_ms: Option<u64>,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub events: Events,
}

impl Snapshot {
    /// Whole seconds left on the clock, rounded up, for a countdown display
    pub fn time_remaining_secs(&self) -> Option<u64> {
        self.time_remaining_ms.map(|ms| ms.div_ceil(1000))
    }
}
