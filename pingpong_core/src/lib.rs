pub mod components;
pub mod config;
pub mod error;
pub mod match_state;
pub mod params;
pub mod particles;
pub mod resources;
pub mod simulation;
pub mod snapshot;
pub mod systems;
pub mod table;

pub use components::*;
pub use config::*;
pub use error::*;
pub use match_state::*;
pub use params::*;
pub use particles::*;
pub use resources::*;
pub use simulation::*;
pub use snapshot::*;
pub use table::*;

use std::ops::ControlFlow;

use hecs::World;
use systems::*;

/// Run one deterministic step of the table tennis simulation
pub fn step(state: &mut SimulationState) {
    state.tick += 1;

    // Clear events at start of step
    state.events.clear();

    // 1. Apply queued host commands
    while let Some(command) = state.commands.pop() {
        state.apply_command(command);
    }

    // Paused freezes everything but command handling
    if state.match_state.is_paused() {
        return;
    }

    // 2. Move paddles (pointer read once per step)
    let pointer = state.pointer.snapshot();
    follow_pointer(&mut state.world, pointer.x, &state.table);
    track_ball(&mut state.world, &state.table, &mut state.rng);

    // 3. Ball physics, only while the rally is live
    if state.match_state.is_live() {
        advance_ball(
            &mut state.world,
            &state.table,
            &state.config,
            pointer.x,
            &mut state.events,
            &mut state.rng,
        );
    }

    // 4. Hit effects
    spawn_hit_effects(
        &mut state.particles,
        &state.events,
        state.config.particle_burst,
        &mut state.rng,
    );
    update_particles(&mut state.particles);

    // 5. Scoring and win check
    if let Some(side) = state.events.point {
        state.match_state.record_point(side);
    }
}

/// Drive the simulation from a host loop.
///
/// `host` runs before every step (feed input, render, pace the loop) and ends
/// the loop by returning `ControlFlow::Break`. Returns the number of steps taken.
pub fn run<F>(state: &mut SimulationState, mut host: F) -> u64
where
    F: FnMut(&mut SimulationState) -> ControlFlow<()>,
{
    let mut steps = 0;
    while host(state).is_continue() {
        step(state);
        steps += 1;
    }
    steps
}

/// Helper to create the pointer-driven paddle entity
pub fn create_player_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle, PointerControl))
}

/// Helper to create the computer-driven paddle entity
pub fn create_ai_paddle(world: &mut World, paddle: Paddle, difficulty: f32) -> hecs::Entity {
    world.spawn((paddle, AiControl { difficulty }))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
