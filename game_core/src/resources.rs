use rand::SeedableRng;

use crate::components::{Direction, Side};

/// Wall-clock bookkeeping for the round timer.
///
/// Only the delta between successive `advance` calls is charged to the round;
/// `resync` moves the baseline without charging anything, which is how paused
/// intervals are kept off the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    baseline_ms: Option<u64>,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the elapsed milliseconds since the baseline and moves the baseline.
    pub fn advance(&mut self, now_ms: u64) -> u64 {
        let elapsed = self
            .baseline_ms
            .map(|base| now_ms.saturating_sub(base))
            .unwrap_or(0);
        self.baseline_ms = Some(now_ms);
        elapsed
    }

    pub fn resync(&mut self, now_ms: u64) {
        self.baseline_ms = Some(now_ms);
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the OS entropy source.
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick, for cosmetic and audio collaborators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub left_paddle_hit: bool,
    pub right_paddle_hit: bool,
    pub ball_hit_wall: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn record_hit(&mut self, side: Side) {
        match side {
            Side::Left => self.left_paddle_hit = true,
            Side::Right => self.right_paddle_hit = true,
        }
    }

    pub fn record_score(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }

    pub fn any_paddle_hit(&self) -> bool {
        self.left_paddle_hit || self.right_paddle_hit
    }
}

/// Logical per-paddle input, decoupled from any key bindings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: Direction,
    pub right: Direction,
}

impl InputState {
    pub fn new(left: Direction, right: Direction) -> Self {
        Self { left, right }
    }

    pub fn for_side(&self, side: Side) -> Direction {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, dir: Direction) {
        match side {
            Side::Left => self.left = dir,
            Side::Right => self.right = dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_first_advance_charges_nothing() {
        let mut time = Time::new();
        assert_eq!(time.advance(5_000), 0);
        assert_eq!(time.advance(5_016), 16);
    }

    #[test]
    fn test_time_resync_skips_gap() {
        let mut time = Time::new();
        time.resync(1_000);
        assert_eq!(time.advance(1_020), 20);
        time.resync(90_000);
        assert_eq!(time.advance(90_017), 17, "Gap before resync is never charged");
    }

    #[test]
    fn test_time_saturates_on_backwards_clock() {
        let mut time = Time::new();
        time.resync(2_000);
        assert_eq!(time.advance(1_500), 0);
        assert_eq!(time.advance(1_516), 16, "Baseline follows the clock back");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.record_score(Side::Left);
        events.record_score(Side::Right);
        events.record_hit(Side::Left);
        events.ball_hit_wall = true;
        events.game_over = true;

        events.clear();

        assert_eq!(events, Events::default());
        assert!(!events.any_paddle_hit());
    }

    #[test]
    fn test_input_state_per_side() {
        let mut input = InputState::default();
        input.set(Side::Right, Direction::Down);
        assert_eq!(input.for_side(Side::Left), Direction::Stop);
        assert_eq!(input.for_side(Side::Right), Direction::Down);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<u32> = (0..8).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }
}
