pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;
pub mod timestep;

pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use timestep::*;

use hecs::World;
use systems::{
    apply_start, bounce_off_paddles, bounce_off_walls, check_scoring, move_ball, move_paddles,
};

/// Run one deterministic Pong tick
pub fn step(
    world: &mut World,
    input: &InputFrame,
    config: &Config,
    score: &mut Score,
    started: &mut bool,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Latch the start key
    apply_start(input, started, events);

    // 2. Move paddles (allowed before the game starts)
    move_paddles(world, input, config);

    // 3. Ball is frozen until started
    if !*started {
        return;
    }

    // 4. Move ball
    move_ball(world);

    // 5. Top/bottom walls
    bounce_off_walls(world, config, events);

    // 6. Ball exited left or right
    check_scoring(world, config, score, events);

    // 7. Paddles
    bounce_off_paddles(world, config, events);
}

/// Helper to create a paddle entity at its start position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let pos = glam::IVec2::new(config.paddle_x(side), config.paddle_start_y());
    world.spawn((Paddle::new(side, pos),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::IVec2, vel: glam::IVec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
