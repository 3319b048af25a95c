use glam::Vec2;
use serde::Serialize;

use crate::{Ball, Paddle, Particle, Side};

/// Ball as seen by a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub spin: f32,
    /// Oldest first
    pub trail: Vec<Vec2>,
    pub last_hit_by: Option<Side>,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            pos: ball.pos,
            radius: ball.radius,
            spin: ball.spin,
            trail: ball.trail.iter().copied().collect(),
            last_hit_by: ball.last_hit_by,
        }
    }
}

/// Everything observable after a step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player_score: u32,
    pub ai_score: u32,
    pub winner: Option<Side>,
    pub playing: bool,
    pub paused: bool,
    pub ball_speed: f32,
    pub ball: Option<BallView>,
    pub player: Option<Paddle>,
    pub ai: Option<Paddle>,
    pub particles: Vec<Particle>,
}
