use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::map::Court;
use crate::resources::Events;

/// Apply paddle velocities, clamped to the court
pub fn move_paddles(world: &mut World, court: &Court) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance(court);
    }
}

/// Move the ball one tick. Returns the scoring side if the ball cleared an end line.
pub fn move_ball(world: &mut World, court: &Court, events: &mut Events) -> Option<Side> {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let outcome = ball.advance(court);
        events.ball_hit_wall |= outcome.wall_hit;
        scorer = outcome.scorer;
    }
    scorer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Controller, Direction};
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_paddles_stay_in_court() {
        let mut world = World::new();
        let court = Court::default();
        let left = create_paddle(&mut world, Side::Left, &court, Controller::Human);
        let right = create_paddle(&mut world, Side::Right, &court, Controller::Human);
        world.get::<&mut Paddle>(left).unwrap().set_intent(Direction::Up);
        world.get::<&mut Paddle>(right).unwrap().set_intent(Direction::Down);

        for _ in 0..200 {
            move_paddles(&mut world, &court);
            for (_e, paddle) in world.query::<&Paddle>().iter() {
                assert!(paddle.y >= 0.0 && paddle.y <= court.height - paddle.height);
            }
        }

        assert_eq!(world.get::<&Paddle>(left).unwrap().y, 0.0);
        assert_eq!(world.get::<&Paddle>(right).unwrap().y, 320.0);
    }

    #[test]
    fn test_move_ball_flags_wall_hit() {
        let mut world = World::new();
        let court = Court::default();
        let mut events = Events::new();
        create_ball(&mut world, Ball::new(Vec2::new(400.0, 10.0), Vec2::new(4.0, -4.0)));

        let scorer = move_ball(&mut world, &court, &mut events);

        assert_eq!(scorer, None);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_move_ball_reports_scorer() {
        let mut world = World::new();
        let court = Court::default();
        let mut events = Events::new();
        create_ball(&mut world, Ball::new(Vec2::new(806.0, 200.0), Vec2::new(4.0, 0.0)));

        assert_eq!(move_ball(&mut world, &court, &mut events), Some(Side::Left));
    }
}
