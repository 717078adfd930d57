use hecs::World;

use crate::components::{Ball, Paddle};
use crate::resources::Events;

/// Check the ball against both paddles, left first.
///
/// Both checks always run; with the anti-stick correction only one can
/// plausibly hit in a given tick.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side as u8);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.collide_with_paddle(paddle) {
                events.record_hit(paddle.side);
            }
        }
    }
}
