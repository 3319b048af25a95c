use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use glam::Vec2;
use serde::Serialize;

use crate::components::Side;
use crate::params::Params;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollisionKind {
    Wall,
    Net,
    Paddle(Side),
}

impl CollisionKind {
    /// Effect color (0xRRGGBB) for particles spawned by this collision
    pub fn color(self) -> u32 {
        match self {
            CollisionKind::Wall => Params::WALL_COLOR,
            CollisionKind::Net => Params::NET_COLOR,
            CollisionKind::Paddle(Side::Player) => Params::PLAYER_COLOR,
            CollisionKind::Paddle(Side::Ai) => Params::AI_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionEvent {
    pub kind: CollisionKind,
    pub pos: Vec2,
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub collisions: Vec<CollisionEvent>,
    /// Side that won the rally this step, if any
    pub point: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.collisions.clear();
        self.point = None;
    }

    pub fn push_collision(&mut self, kind: CollisionKind, pos: Vec2) {
        self.collisions.push(CollisionEvent { kind, pos });
    }

    pub fn hit(&self, kind: CollisionKind) -> bool {
        self.collisions.iter().any(|c| c.kind == kind)
    }
}

/// Host commands, see [`crate::SimulationState::push_command`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewGame,
    TogglePause,
    ResetScore,
}

/// Commands queued by the host, applied at the start of the next step
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    commands: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Pointer position in simulation coordinates, shareable with an input thread.
///
/// Both coordinates live in one atomic word, so a reader always sees an
/// (x, y) pair written together.
#[derive(Debug, Clone, Default)]
pub struct SharedPointer(Arc<AtomicU64>);

impl SharedPointer {
    pub fn new(pos: Vec2) -> Self {
        let pointer = Self::default();
        pointer.set(pos);
        pointer
    }

    pub fn set(&self, pos: Vec2) {
        let packed = (u64::from(pos.x.to_bits()) << 32) | u64::from(pos.y.to_bits());
        self.0.store(packed, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> Vec2 {
        let packed = self.0.load(Ordering::Relaxed);
        Vec2::new(
            f32::from_bits((packed >> 32) as u32),
            f32::from_bits(packed as u32),
        )
    }
}
