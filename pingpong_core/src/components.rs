use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::resources::GameRng;
use crate::table::Aabb;

/// Which end of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// Human player, bottom of the table
    Player,
    /// Computer opponent, top of the table
    Ai,
}

/// Paddle component. `pos` is the top-left corner; y never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32, speed: f32) -> Self {
        Self {
            side,
            pos,
            width,
            height,
            speed,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, Vec2::new(self.width, self.height))
    }
}

/// Marker: paddle follows the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerControl;

/// Paddle driven by the predictive tracker
#[derive(Debug, Clone, Copy)]
pub struct AiControl {
    /// Tracking accuracy in [0, 1]; 1.0 means no injected error
    pub difficulty: f32,
}

/// Ball component
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub spin: f32,
    /// Recent positions, oldest first. Rendering only.
    pub trail: VecDeque<Vec2>,
    pub trail_length: usize,
    pub last_hit_by: Option<Side>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, trail_length: usize) -> Self {
        Self {
            pos,
            vel,
            radius,
            spin: 0.0,
            trail: VecDeque::with_capacity(trail_length + 1),
            trail_length,
            last_hit_by: None,
        }
    }

    /// Re-serve from `spawn` with each velocity component given a random sign
    pub fn reset(&mut self, spawn: Vec2, serve: Vec2, rng: &mut GameRng) {
        self.pos = spawn;
        let vx = if rng.0.gen_bool(0.5) { serve.x } else { -serve.x };
        let vy = if rng.0.gen_bool(0.5) { serve.y } else { -serve.y };
        self.vel = Vec2::new(vx, vy);
        self.spin = 0.0;
        self.trail.clear();
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Rescale velocity down to `max_speed`, keeping its direction.
    ///
    /// Returns true if the velocity was changed. A zero velocity is left alone.
    pub fn clamp_speed(&mut self, max_speed: f32) -> bool {
        let speed = self.speed();
        if speed > max_speed && speed > 0.0 {
            self.vel = self.vel / speed * max_speed;
            true
        } else {
            false
        }
    }

    /// Append the current position, evicting the oldest beyond `trail_length`
    pub fn record_trail(&mut self) {
        self.trail.push_back(self.pos);
        while self.trail.len() > self.trail_length {
            self.trail.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_serves_from_fixed_magnitudes() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(1.0, 2.0), Vec2::new(9.0, 9.0), 8.0, 8);
        ball.spin = 0.4;
        ball.record_trail();

        for _ in 0..20 {
            ball.reset(Vec2::new(400.0, 270.0), Vec2::new(4.0, 3.0), &mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 270.0));
            assert_eq!(ball.vel.x.abs(), 4.0);
            assert_eq!(ball.vel.y.abs(), 3.0);
            assert_eq!(ball.spin, 0.0);
            assert!(ball.trail.is_empty());
        }
    }

    #[test]
    fn test_reset_uses_both_directions() {
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 8.0, 8);
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..64 {
            ball.reset(Vec2::ZERO, Vec2::new(4.0, 3.0), &mut rng);
            seen_left |= ball.vel.x < 0.0;
            seen_right |= ball.vel.x > 0.0;
        }
        assert!(seen_left && seen_right, "Serve direction should vary");
    }

    #[test]
    fn test_clamp_speed_preserves_direction() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(30.0, -40.0), 8.0, 8);
        assert!(ball.clamp_speed(12.0));
        assert!((ball.speed() - 12.0).abs() < 1e-4);
        assert!((ball.vel.x - 7.2).abs() < 1e-4);
        assert!((ball.vel.y + 9.6).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_speed_skips_slow_and_stationary_balls() {
        let mut slow = Ball::new(Vec2::ZERO, Vec2::new(4.0, 3.0), 8.0, 8);
        assert!(!slow.clamp_speed(12.0));
        assert_eq!(slow.vel, Vec2::new(4.0, 3.0));

        let mut still = Ball::new(Vec2::ZERO, Vec2::ZERO, 8.0, 8);
        assert!(!still.clamp_speed(12.0));
        assert_eq!(still.vel, Vec2::ZERO);
        assert!(!still.vel.x.is_nan());
    }

    #[test]
    fn test_trail_is_bounded_and_evicts_oldest() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 8.0, 3);
        for i in 0..5 {
            ball.pos = Vec2::new(i as f32, 0.0);
            ball.record_trail();
        }
        let xs: Vec<f32> = ball.trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_paddle_bounds_and_center() {
        let paddle = Paddle::new(Side::Player, Vec2::new(360.0, 380.0), 80.0, 12.0, 8.0);
        assert_eq!(paddle.center_x(), 400.0);
        assert_eq!(paddle.bounds().max, Vec2::new(440.0, 392.0));
    }
}
