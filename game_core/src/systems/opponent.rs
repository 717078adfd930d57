use hecs::World;

use crate::components::{Ball, Controller, Paddle};
use crate::map::Court;

/// Let each computer-controlled paddle decide its velocity from the ball
pub fn drive_opponents(world: &mut World, court: &Court) {
    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return, // No ball in world
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if let Controller::Computer(ai) = controller {
            let velocity = ai.decide(paddle, &ball, court.height);
            paddle.drive(velocity);
        }
    }
}
