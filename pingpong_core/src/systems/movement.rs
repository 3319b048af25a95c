use hecs::World;

use crate::params::Params;
use crate::Ball;

/// Move ball by its velocity, then let spin bend the horizontal velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
        ball.vel.x += ball.spin * Params::SPIN_TRANSFER;
        ball.spin *= Params::SPIN_DECAY;
    }
}

/// Cap ball speed, keeping direction
pub fn limit_ball_speed(world: &mut World, max_speed: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.clamp_speed(max_speed);
    }
}

/// Push current ball positions onto their trails
pub fn record_trails(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.record_trail();
    }
}
