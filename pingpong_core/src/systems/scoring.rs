use glam::Vec2;
use hecs::World;
use log::debug;

use crate::params::Params;
use crate::table::Table;
use crate::{Ball, Config, Events, GameRng, Side};

/// Side credited when a ball at `y` has left the play area, if any
pub fn point_winner(y: f32, table: &Table) -> Option<Side> {
    if y > table.arena_height() + Params::OUT_OF_BOUNDS_MARGIN {
        // Past the player's end
        Some(Side::Ai)
    } else if y < -Params::OUT_OF_BOUNDS_MARGIN {
        // Past the AI's end
        Some(Side::Player)
    } else {
        None
    }
}

/// Check if ball left the play area (scoring).
///
/// Re-serves the ball and records the point in `events`; the score itself is
/// kept by the match state.
pub fn check_scoring(
    world: &mut World,
    table: &Table,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let serve = Vec2::new(config.serve_vx, config.serve_vy);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = point_winner(ball.pos.y, table) {
            debug!("Ball out at {:?}, point to {:?}", ball.pos, side);
            events.point = Some(side);
            ball.reset(table.ball_spawn(), serve, rng);
        }
    }
}
