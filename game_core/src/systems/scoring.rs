use hecs::World;
use tracing::debug;

use crate::components::{Ball, Side};
use crate::map::Court;
use crate::resources::{Events, GameRng};
use crate::score::ScoreKeeper;

/// Award the point for a ball that left the court and serve a new one
pub fn check_scoring(
    world: &mut World,
    court: &Court,
    scorer: Option<Side>,
    score: &mut ScoreKeeper,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let Some(side) = scorer else {
        return;
    };

    let winner = score.record_point(side);
    events.record_score(side);
    debug!(
        ?side,
        left = score.left(),
        right = score.right(),
        "point scored"
    );
    if winner.is_some() {
        events.game_over = true;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(court, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use crate::score::{RoundMode, Winner};
    use glam::Vec2;

    fn setup_world() -> (World, Court, ScoreKeeper, Events, GameRng) {
        let world = World::new();
        let court = Court::default();
        let mut score = ScoreKeeper::default();
        score.start();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, court, score, events, rng)
    }

    #[test]
    fn test_right_player_scores() {
        let (mut world, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Ball::new(Vec2::new(-9.0, 200.0), Vec2::new(-4.0, 0.0)));

        check_scoring(&mut world, &court, Some(Side::Right), &mut score, &mut events, &mut rng);

        assert_eq!(score.right(), 1, "Right player should score");
        assert_eq!(score.left(), 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Ball::new(Vec2::new(810.0, 50.0), Vec2::new(8.0, 1.0)));

        check_scoring(&mut world, &court, Some(Side::Left), &mut score, &mut events, &mut rng);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, court.center(), "Ball should reset to center");
            assert_eq!(ball.vel.x.abs(), ball.base_speed, "Rally speed-up is discarded");
            assert_eq!(ball.vel.y.abs(), ball.base_speed);
        }
        assert!(events.left_scored);
    }

    #[test]
    fn test_no_scoring_without_scorer() {
        let (mut world, court, mut score, mut events, mut rng) = setup_world();
        let ball = Ball::new(Vec2::new(400.0, 200.0), Vec2::new(4.0, 4.0));
        create_ball(&mut world, ball);

        check_scoring(&mut world, &court, None, &mut score, &mut events, &mut rng);

        assert_eq!((score.left(), score.right()), (0, 0));
        assert_eq!(events, Events::default());
        for (_entity, b) in world.query::<&Ball>().iter() {
            assert_eq!(*b, ball, "Ball in play is left alone");
        }
    }

    #[test]
    fn test_winning_point_flags_game_over() {
        let (mut world, court, _score, mut events, mut rng) = setup_world();
        let mut score = ScoreKeeper::new(1, RoundMode::ScoreLimit);
        score.start();
        create_ball(&mut world, Ball::new(Vec2::new(-9.0, 200.0), Vec2::new(-4.0, 0.0)));

        check_scoring(&mut world, &court, Some(Side::Right), &mut score, &mut events, &mut rng);

        assert!(events.game_over);
        assert_eq!(score.winner(), Some(Winner::Right));
    }
}
