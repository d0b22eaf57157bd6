pub mod components;
pub mod config;
pub mod gesture;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use gesture::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one fixed step of the free-throw simulation
pub fn step(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    stats: &mut ShotStats,
    events: &mut Events,
) {
    // 1. Gravity + Euler position update
    integrate_ball(world, config);

    // 2. Basket check (needs the unclamped step to recover the previous position)
    check_scoring(world, court, config, score, stats, events);

    // 3. Floor and wall bounces, settling
    resolve_bounds(world, court, config, events);
}

/// Helper to create the ball entity, at rest
pub fn create_ball(world: &mut World, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::at_rest(pos),))
}
