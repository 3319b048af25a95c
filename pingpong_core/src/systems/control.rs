use glam::Vec2;
use hecs::World;
use log::trace;
use rand::Rng;

use crate::params::Params;
use crate::table::Table;
use crate::{AiControl, Ball, GameRng, Paddle, PointerControl};

/// Ease pointer-controlled paddles toward the pointer.
///
/// The paddle covers a fixed fraction of the remaining distance each step, so
/// pointer jumps never teleport it.
pub fn follow_pointer(world: &mut World, pointer_x: f32, table: &Table) {
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &PointerControl)>() {
        let target_x = table.clamp_paddle_x(pointer_x - paddle.width / 2.0, paddle.width);
        paddle.pos.x += (target_x - paddle.pos.x) * Params::PLAYER_EASING;
    }
}

/// Where a ball heading toward `paddle_y` will cross it, assuming straight flight.
///
/// Ignores wall bounces. A ball moving away (or not moving vertically) is
/// tracked at its current x.
pub fn predict_intercept_x(ball_pos: Vec2, ball_vel: Vec2, paddle_y: f32) -> f32 {
    if ball_vel.y < 0.0 {
        let time_to_reach = ((paddle_y - ball_pos.y) / ball_vel.y).abs();
        ball_pos.x + ball_vel.x * time_to_reach
    } else {
        ball_pos.x
    }
}

/// Predicted intercept plus a random error that shrinks to zero at difficulty 1.0
pub fn ai_target_x(
    ball_pos: Vec2,
    ball_vel: Vec2,
    paddle: &Paddle,
    difficulty: f32,
    rng: &mut GameRng,
) -> f32 {
    let error = (rng.0.gen::<f32>() - 0.5) * (1.0 - difficulty) * Params::AI_ERROR_SPAN;
    predict_intercept_x(ball_pos, ball_vel, paddle.pos.y) + error
}

/// Move a paddle's center at most `paddle.speed` toward `target_x`.
///
/// Targets within the deadband are ignored to avoid jitter.
pub fn step_toward(paddle: &mut Paddle, target_x: f32, table: &Table) {
    let half_width = paddle.width / 2.0;
    let target_x = target_x.clamp(
        table.left() + half_width,
        (table.right() - half_width).max(table.left() + half_width),
    );
    let dx = target_x - paddle.center_x();
    if dx.abs() > Params::AI_DEADBAND {
        let delta = dx.signum() * dx.abs().min(paddle.speed);
        paddle.pos.x = table.clamp_paddle_x(paddle.pos.x + delta, paddle.width);
    }
}

/// Steer AI paddles toward the ball
pub fn track_ball(world: &mut World, table: &Table, rng: &mut GameRng) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (ball_pos, ball_vel) = match ball_data {
        Some(data) => data,
        None => return,
    };

    for (_entity, (paddle, ai)) in world.query_mut::<(&mut Paddle, &AiControl)>() {
        let target_x = ai_target_x(ball_pos, ball_vel, paddle, ai.difficulty, rng);
        trace!("AI target x {:.1} (paddle center {:.1})", target_x, paddle.center_x());
        step_toward(paddle, target_x, table);
    }
}
