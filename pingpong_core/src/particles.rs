//! Hit-effect particles
//!
//! Purely visual: nothing here feeds back into gameplay.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::params::Params;
use crate::resources::{Events, GameRng};

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, removed once it reaches 0
    pub life: f32,
    pub decay: f32,
    pub size: f32,
    /// 0xRRGGBB
    pub color: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: u32) -> Self {
        Self {
            pos,
            vel,
            life: 1.0,
            decay: Params::PARTICLE_DECAY,
            size,
            color,
        }
    }
}

/// Advance one particle by one step
pub fn update_particle(particle: &mut Particle) {
    particle.pos += particle.vel;
    particle.vel *= Params::PARTICLE_DAMPING;
    particle.life -= particle.decay;
    particle.size *= Params::PARTICLE_SHRINK;
}

pub fn is_expired(particle: &Particle) -> bool {
    particle.life <= 0.0
}

/// Spray `count` particles from `pos`
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    pos: Vec2,
    color: u32,
    count: usize,
    rng: &mut GameRng,
) {
    let spread = Params::PARTICLE_SPREAD;
    particles.reserve(count);
    for _ in 0..count {
        let vel = Vec2::new(
            rng.0.gen_range(-spread..spread),
            rng.0.gen_range(-spread..spread),
        );
        let size = rng
            .0
            .gen_range(Params::PARTICLE_SIZE_MIN..Params::PARTICLE_SIZE_MAX);
        particles.push(Particle::new(pos, vel, size, color));
    }
}

/// Spawn a burst at every collision recorded this step
pub fn spawn_hit_effects(
    particles: &mut Vec<Particle>,
    events: &Events,
    count: usize,
    rng: &mut GameRng,
) {
    for collision in &events.collisions {
        spawn_burst(particles, collision.pos, collision.kind.color(), count, rng);
    }
}

/// Advance every particle and drop the ones that burned out
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|particle| {
        update_particle(particle);
        !is_expired(particle)
    });
}
