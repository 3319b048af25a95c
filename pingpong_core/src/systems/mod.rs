pub mod collision;
pub mod control;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use control::*;
pub use movement::*;
pub use scoring::*;

use hecs::World;

use crate::{Config, Events, GameRng, Table};

/// One step of ball physics: move, collide, score, clamp, then trail.
///
/// The trail is left empty on a step where a point was scored.
pub fn advance_ball(
    world: &mut World,
    table: &Table,
    config: &Config,
    pointer_x: f32,
    events: &mut Events,
    rng: &mut GameRng,
) {
    move_ball(world);
    check_collisions(world, table, pointer_x, events);
    check_scoring(world, table, config, events, rng);
    limit_ball_speed(world, config.ball_speed_max);
    if events.point.is_none() {
        record_trails(world);
    }
}
