pub mod components;
pub mod config;
pub mod error;
pub mod frame;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use frame::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;
pub use session::*;
pub use systems::*;

use hecs::World;

/// Run one deterministic Pong simulation tick.
///
/// `ai` is the profile steering AI-controlled paddles, `None` in two-player
/// mode. Returns the side that scored this tick, if any.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    input: &InputState,
    ai: Option<&AiProfile>,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. AI picks its intent from the ball position
    if let Some(profile) = ai {
        drive_ai(world, profile);
    }

    // 3. Move paddles based on intents
    move_paddles(world, config);

    // 4. Move ball
    move_ball(world);

    // 5. Check collisions (ball vs walls, paddles)
    check_collisions(world, map, config, events);

    // 6. Check scoring (ball exited arena)
    check_scoring(world, map, config, score, events, rng)
}

/// Helper to create a paddle entity, vertically centered
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_x(side),
        config.center_paddle_y(),
        config.paddle_width,
        config.paddle_height,
        config.paddle_speed,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
