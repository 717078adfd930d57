/// Fixed tuning constants for the court, paddles, ball and opponent.
///
/// Units are court pixels; speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between paddle and court edge

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_INITIAL: f32 = 4.0;
    pub const BALL_SPEED_MAX: f32 = 8.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.2; // added to |dx| on every paddle hit
    pub const BALL_DEFLECTION: f32 = 0.5; // dy at the paddle edge, as a fraction of base speed

    // Opponent
    pub const AI_RECENTER_FACTOR: f32 = 0.3;
    pub const AI_RECENTER_DEAD_ZONE: f32 = 10.0;

    // Round
    pub const WIN_SCORE: u8 = 11;
    pub const ROUND_DURATION_MS: u64 = 120_000;

    // Pacing
    pub const TICK_RATE_HZ: u32 = 60;
}
