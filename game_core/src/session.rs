//! Match orchestration
//!
//! `GameSession` owns the world and every resource the tick pipeline needs,
//! and is the only thing a host (render loop, test, headless runner) talks to.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{info, warn};

use crate::ai::{Difficulty, OpponentController};
use crate::components::{Ball, Controller, Paddle, Side};
use crate::config::{Config, PlayerMode};
use crate::map::Court;
use crate::resources::{Events, GameRng, InputState, Time};
use crate::score::{RoundMode, RoundState, ScoreKeeper};
use crate::snapshot::Snapshot;
use crate::{create_ball, create_paddle, step};

pub struct GameSession {
    world: World,
    court: Court,
    config: Config,
    score: ScoreKeeper,
    time: Time,
    events: Events,
    rng: GameRng,
    tick: u64,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl GameSession {
    pub fn new(config: Config, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    pub fn with_entropy(config: Config) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    fn with_rng(config: Config, mut rng: GameRng) -> Self {
        let court = Court::new(config.court_width, config.court_height);
        let mut world = World::new();

        let left = create_paddle(&mut world, Side::Left, &court, Controller::Human);
        let right = create_paddle(&mut world, Side::Right, &court, right_controller(&config));
        let ball = create_ball(&mut world, Ball::serve(&court, &mut rng));

        let score = ScoreKeeper::new(config.max_score, config.round);

        Self {
            world,
            court,
            config,
            score,
            time: Time::new(),
            events: Events::new(),
            rng,
            tick: 0,
            left,
            right,
            ball,
        }
    }

    /// Start a round. Starting after game over begins a fresh round.
    pub fn start(&mut self, now_ms: u64) -> bool {
        let was_over = self.score.is_over();
        if !self.score.start() {
            return false;
        }
        if was_over {
            self.reset_entities();
        }
        self.time.resync(now_ms);
        info!(
            players = %self.config.players,
            round = ?self.config.round,
            max_score = self.score.max_score(),
            "round started"
        );
        true
    }

    pub fn pause(&mut self) -> bool {
        let paused = self.score.pause();
        if paused {
            info!(tick = self.tick, "round paused");
        }
        paused
    }

    /// Resume a paused round. The clock baseline moves to `now_ms`, so the
    /// paused interval is never charged to the round.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if !self.score.resume() {
            return false;
        }
        self.time.resync(now_ms);
        info!(tick = self.tick, "round resumed");
        true
    }

    /// Flip between running and paused. Returns whether the round is now paused.
    pub fn toggle_pause(&mut self, now_ms: u64) -> bool {
        match self.score.state() {
            RoundState::Running => {
                self.pause();
            }
            RoundState::Paused => {
                self.resume(now_ms);
            }
            RoundState::Idle | RoundState::Over => {}
        }
        self.score.state() == RoundState::Paused
    }

    /// Back to idle: zero scores, full clock, paddles centred, new serve.
    pub fn reset(&mut self) {
        self.score.reset();
        self.reset_entities();
        self.events.clear();
        self.tick = 0;
        info!("round reset");
    }

    fn reset_entities(&mut self) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.reset(&self.court);
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.court, &mut self.rng);
        }
    }

    /// Advance one tick at wall-clock time `now_ms`. Does nothing unless running.
    pub fn tick(&mut self, now_ms: u64, input: &InputState) -> Snapshot {
        if !self.score.is_running() {
            self.events.clear();
            return self.snapshot();
        }

        self.tick += 1;
        step(
            &mut self.world,
            &self.court,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        // Score threshold was checked inside the step; the timer goes second
        let elapsed = self.time.advance(now_ms);
        if self.score.tick(elapsed).is_some() {
            self.events.game_over = true;
        }

        if self.events.game_over {
            info!(
                winner = ?self.score.winner(),
                left = self.score.left(),
                right = self.score.right(),
                tick = self.tick,
                "round over"
            );
        }

        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.score.state();
        Snapshot {
            tick: self.tick,
            state,
            running: matches!(state, RoundState::Running | RoundState::Paused),
            paused: state == RoundState::Paused,
            game_over: state == RoundState::Over,
            winner: self.score.winner(),
            left_score: self.score.left(),
            right_score: self.score.right(),
            max_score: self.score.max_score(),
            time_remaining_ms: self.score.remaining_ms(),
            left_paddle: self.paddle(Side::Left),
            right_paddle: self.paddle(Side::Right),
            ball: self.ball(),
            events: self.events,
        }
    }

    pub fn set_player_mode(&mut self, players: PlayerMode) {
        if players == self.config.players {
            return;
        }
        self.config.players = players;
        let controller = right_controller(&self.config);
        if let Ok(mut current) = self.world.get::<&mut Controller>(self.right) {
            *current = controller;
        }
        info!(%players, "player mode changed");
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        if let Ok(mut controller) = self.world.get::<&mut Controller>(self.right) {
            if let Controller::Computer(ai) = &mut *controller {
                ai.set_difficulty(difficulty);
            }
        }
        info!(%difficulty, "difficulty changed");
    }

    pub fn set_round_mode(&mut self, round: RoundMode) {
        self.config.round = round;
        self.score.configure(self.config.max_score, round);
    }

    /// Change the score target. Zero is ignored, as is anything at or below
    /// the leading score while a round is in progress.
    pub fn set_max_score(&mut self, max_score: u8) {
        if !self.score.accepts_target(max_score) {
            warn!(
                max_score,
                left = self.score.left(),
                right = self.score.right(),
                "ignoring score target"
            );
            return;
        }
        self.config.max_score = max_score;
        self.score.configure(max_score, self.config.round);
    }

    /// Like `set_player_mode`, but unknown identifiers keep the current mode.
    pub fn set_player_mode_str(&mut self, players: &str) {
        match players.parse() {
            Ok(players) => self.set_player_mode(players),
            Err(err) => warn!(%err, current = %self.config.players, "ignoring player mode"),
        }
    }

    /// Like `set_round_mode`, but unknown identifiers keep the current mode.
    pub fn set_round_mode_str(&mut self, round: &str) {
        match round.parse() {
            Ok(round) => self.set_round_mode(round),
            Err(err) => warn!(%err, current = ?self.config.round, "ignoring round mode"),
        }
    }

    /// Like `set_difficulty`, but unknown identifiers keep the current difficulty.
    pub fn set_difficulty_str(&mut self, difficulty: &str) {
        match difficulty.parse() {
            Ok(difficulty) => self.set_difficulty(difficulty),
            Err(err) => warn!(%err, current = %self.config.difficulty, "ignoring difficulty"),
        }
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, &self.court))
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.court.center(), Vec2::ZERO))
    }

    pub fn controller(&self, side: Side) -> Controller {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world
            .get::<&Controller>(entity)
            .map(|controller| *controller)
            .unwrap_or(Controller::Human)
    }

    pub fn score(&self) -> &ScoreKeeper {
        &self.score
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn events(&self) -> &Events {
        &self.events
    }
}

fn right_controller(config: &Config) -> Controller {
    match config.players {
        PlayerMode::SinglePlayer => {
            Controller::Computer(OpponentController::new(config.difficulty))
        }
        PlayerMode::TwoPlayer => Controller::Human,
    }
}
