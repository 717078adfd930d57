use hecs::World;

use crate::components::{Controller, Paddle};
use crate::resources::InputState;

/// Apply external input to human-controlled paddles
pub fn apply_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Human {
            paddle.set_intent(input.for_side(paddle.side));
        }
    }
}
