use glam::Vec2;
use rand::Rng;

use crate::ai::OpponentController;
use crate::map::{Bounds, Court};
use crate::params::Params;
use crate::resources::GameRng;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Logical vertical intent for a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Stop,
}

impl Direction {
    /// Resolve a pair of held keys. Up wins when both are held.
    pub fn from_keys(up: bool, down: bool) -> Self {
        if up {
            Direction::Up
        } else if down {
            Direction::Down
        } else {
            Direction::Stop
        }
    }
}

/// Paddle component - vertical-motion entity clamped to the court
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // left edge, fixed per side
    pub y: f32, // top edge
    pub width: f32,
    pub height: f32,
    pub velocity: f32, // pixels per tick, positive = down
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, court: &Court) -> Self {
        Self {
            side,
            x: court.paddle_x(side, Params::PADDLE_WIDTH),
            y: court.paddle_spawn_y(Params::PADDLE_HEIGHT),
            width: Params::PADDLE_WIDTH,
            height: Params::PADDLE_HEIGHT,
            velocity: 0.0,
            speed: Params::PADDLE_SPEED,
        }
    }

    pub fn set_intent(&mut self, dir: Direction) {
        self.velocity = match dir {
            Direction::Up => -self.speed,
            Direction::Down => self.speed,
            Direction::Stop => 0.0,
        };
    }

    /// Set an arbitrary vertical velocity (used by the opponent controller).
    pub fn drive(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Apply velocity, then snap to the court boundary if it was crossed.
    pub fn advance(&mut self, court: &Court) {
        self.y = court.clamp_paddle_y(self.y + self.velocity, self.height);
    }

    pub fn center(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }

    /// Re-centre vertically and stop.
    pub fn reset(&mut self, court: &Court) {
        self.y = court.paddle_spawn_y(self.height);
        self.velocity = 0.0;
    }
}

/// Result of moving the ball one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallOutcome {
    pub wall_hit: bool,
    /// Side that earns the point when the ball has fully cleared an end line
    pub scorer: Option<Side>,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: Params::BALL_RADIUS,
            base_speed: Params::BALL_SPEED_INITIAL,
            max_speed: Params::BALL_SPEED_MAX,
            speed_increment: Params::BALL_SPEED_INCREMENT,
        }
    }

    /// A ball at court centre with a random diagonal direction
    pub fn serve(court: &Court, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(court.center(), Vec2::ZERO);
        ball.reset(court, rng);
        ball
    }

    /// Integrate one tick and reflect off the top and bottom walls.
    pub fn advance(&mut self, court: &Court) -> BallOutcome {
        self.pos += self.vel;

        // Only reflect while heading into the wall, so a shallow ball can't jitter in place
        let into_top = self.pos.y - self.radius <= 0.0 && self.vel.y < 0.0;
        let into_bottom = self.pos.y + self.radius >= court.height && self.vel.y > 0.0;
        let wall_hit = into_top || into_bottom;
        if wall_hit {
            self.vel.y = -self.vel.y;
        }

        let scorer = if self.pos.x < -self.radius {
            Some(Side::Right)
        } else if self.pos.x > court.width + self.radius {
            Some(Side::Left)
        } else {
            None
        };

        BallOutcome { wall_hit, scorer }
    }

    /// Bounce off a paddle if the bounding boxes overlap. Returns true on a hit.
    pub fn collide_with_paddle(&mut self, paddle: &Paddle) -> bool {
        let paddle_bounds = paddle.bounds();
        if !self.bounds().overlaps(&paddle_bounds) {
            return false;
        }

        // -1 at the paddle's top edge, 0 at centre, 1 at the bottom edge
        let hit_pos = (self.pos.y - paddle.center()) / (paddle.height / 2.0);

        let speed = (self.vel.x.abs() + self.speed_increment).min(self.max_speed);
        self.vel.x = if self.vel.x > 0.0 { -speed } else { speed };
        self.vel.y = hit_pos * self.base_speed * Params::BALL_DEFLECTION;

        // Sit flush against the face we are leaving
        if self.vel.x > 0.0 {
            self.pos.x = paddle_bounds.right() + self.radius;
        } else {
            self.pos.x = paddle_bounds.left() - self.radius;
        }

        true
    }

    /// Re-centre with base speed and an independently random sign per axis.
    pub fn reset(&mut self, court: &Court, rng: &mut GameRng) {
        self.pos = court.center();
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * self.base_speed, sy * self.base_speed);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center_half_extent(self.pos, Vec2::splat(self.radius))
    }
}

/// Who steers a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer(OpponentController),
}
