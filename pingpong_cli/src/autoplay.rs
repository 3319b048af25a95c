//! Scripted stand-in for a human at the pointer

use glam::Vec2;
use pingpong_core::SimulationState;

/// Pointer position for this step: chase the ball with a slow sideways wobble
/// so returns carry some swing.
pub fn scripted_pointer(state: &SimulationState) -> Vec2 {
    let ball_x = state.ball().map(|ball| ball.pos.x).unwrap_or_else(|| state.table.net_x());
    let wobble = (state.tick as f32 * 0.05).sin() * 25.0;
    Vec2::new(ball_x + wobble, state.table.bottom())
}
