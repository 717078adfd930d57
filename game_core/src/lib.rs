pub mod ai;
pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod systems;

pub use ai::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use score::*;
pub use session::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one fixed physics tick of the Pong simulation
///
/// Order: input -> opponent decision -> paddle and ball movement ->
/// paddle collisions -> scoring. The round timer is charged by the caller
/// afterwards, so a score-threshold win takes precedence over timer expiry.
pub fn step(
    world: &mut World,
    court: &Court,
    input: &InputState,
    score: &mut ScoreKeeper,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to human paddles)
    apply_inputs(world, input);

    // 2. Opponent decides
    drive_opponents(world, court);

    // 3. Move paddles, then ball
    move_paddles(world, court);
    let scorer = move_ball(world, court, events);

    // 4. Ball vs paddles
    check_collisions(world, events);

    // 5. Ball left the court
    check_scoring(world, court, scorer, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    side: Side,
    court: &Court,
    controller: Controller,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, court), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
