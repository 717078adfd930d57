use game_core::{Difficulty, Direction, OpponentController, Side, Snapshot};

/// Steers a human-controlled paddle with the opponent heuristic,
/// translating its velocity into key-style input.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    side: Side,
    controller: OpponentController,
}

impl Autopilot {
    pub fn new(side: Side, difficulty: Difficulty) -> Self {
        Self {
            side,
            controller: OpponentController::new(difficulty),
        }
    }

    pub fn direction(&self, snap: &Snapshot, court_height: f32) -> Direction {
        let paddle = match self.side {
            Side::Left => snap.left_paddle,
            Side::Right => snap.right_paddle,
        };
        let velocity = self.controller.decide(&paddle, &snap.ball, court_height);
        Direction::from_keys(velocity < 0.0, velocity > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, GameSession};

    #[test]
    fn test_left_autopilot_follows_incoming_ball() {
        let mut session = GameSession::new(Config::new().two_player(), 3);
        session.start(0);
        let pilot = Autopilot::new(Side::Left, Difficulty::Expert);
        let court_height = session.court().height;

        let mut snap = session.snapshot();
        for t in 1..200 {
            let dir = pilot.direction(&snap, court_height);
            let offset = snap.ball.pos.y - snap.left_paddle.center();
            if snap.ball.vel.x < 0.0 && offset > Difficulty::Expert.dead_zone() {
                assert_eq!(dir, Direction::Down);
            }
            if snap.ball.vel.x < 0.0 && offset < -Difficulty::Expert.dead_zone() {
                assert_eq!(dir, Direction::Up);
            }
            snap = session.tick(t * 16, &game_core::InputState::new(dir, Direction::Stop));
        }
    }
}
