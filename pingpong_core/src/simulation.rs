use glam::Vec2;
use hecs::{Entity, World};
use log::info;

use crate::snapshot::{BallView, Snapshot};
use crate::{
    create_ai_paddle, create_ball, create_player_paddle, Ball, Command, CommandQueue, Config,
    ConfigError, Events, GameRng, MatchState, Paddle, Particle, SharedPointer, Side, Table,
};

/// Everything one match needs, passed explicitly to every system.
///
/// Mutated only by [`crate::step`] and the command methods.
pub struct SimulationState {
    pub world: World,
    pub table: Table,
    pub config: Config,
    pub match_state: MatchState,
    pub events: Events,
    pub commands: CommandQueue,
    pub pointer: SharedPointer,
    pub particles: Vec<Particle>,
    pub rng: GameRng,
    pub tick: u64,
    ball: Entity,
}

impl SimulationState {
    /// Build a match ready to play; the ball is served immediately
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        let table = Table::from_config(&config)?;
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Paddles start centered on the table
        let start_x =
            table.clamp_paddle_x(table.net_x() - config.paddle_width / 2.0, config.paddle_width);
        create_player_paddle(
            &mut world,
            Paddle::new(
                Side::Player,
                Vec2::new(start_x, config.paddle_y(Side::Player)),
                config.paddle_width,
                config.paddle_height,
                config.paddle_speed(Side::Player),
            ),
        );
        create_ai_paddle(
            &mut world,
            Paddle::new(
                Side::Ai,
                Vec2::new(start_x, config.paddle_y(Side::Ai)),
                config.paddle_width,
                config.paddle_height,
                config.paddle_speed(Side::Ai),
            ),
            config.ai_difficulty,
        );

        let mut ball = Ball::new(
            table.ball_spawn(),
            Vec2::ZERO,
            config.ball_radius,
            config.trail_length,
        );
        ball.reset(
            table.ball_spawn(),
            Vec2::new(config.serve_vx, config.serve_vy),
            &mut rng,
        );
        let ball = create_ball(&mut world, ball);

        info!(
            "Simulation ready: table {}x{}, AI difficulty {}, seed {}",
            table.bounds().width(),
            table.bounds().height(),
            config.ai_difficulty,
            seed
        );

        Ok(Self {
            world,
            pointer: SharedPointer::new(table.ball_spawn()),
            table,
            config,
            match_state: MatchState::new(),
            events: Events::new(),
            commands: CommandQueue::new(),
            particles: Vec::new(),
            rng,
            tick: 0,
            ball,
        })
    }

    /// Advance one fixed step
    pub fn step(&mut self) {
        crate::step(self);
    }

    /// Queue a command for the start of the next step
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Apply a command immediately
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::NewGame => self.new_game(),
            Command::TogglePause => self.toggle_pause(),
            Command::ResetScore => self.reset_score(),
        }
    }

    /// Re-serve and resume play, keeping the scores
    pub fn new_game(&mut self) {
        self.match_state.new_game();
        self.serve();
    }

    pub fn toggle_pause(&mut self) {
        self.match_state.toggle_pause();
    }

    /// Zero the scores and start a new game
    pub fn reset_score(&mut self) {
        self.match_state.reset_score();
        self.serve();
    }

    fn serve(&mut self) {
        let spawn = self.table.ball_spawn();
        let serve = Vec2::new(self.config.serve_vx, self.config.serve_vy);
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(spawn, serve, &mut self.rng);
        }
    }

    /// Update the pointer position (simulation coordinates)
    pub fn set_pointer(&self, pos: Vec2) {
        self.pointer.set(pos);
    }

    /// Handle for an input source that writes the pointer from elsewhere
    pub fn pointer_handle(&self) -> SharedPointer {
        self.pointer.clone()
    }

    pub fn ball(&self) -> Option<hecs::Ref<'_, Ball>> {
        self.world.get::<&Ball>(self.ball).ok()
    }

    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        crate::systems::find_paddle(&self.world, side)
    }

    pub fn ball_speed(&self) -> f32 {
        self.ball().map(|ball| ball.speed()).unwrap_or(0.0)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            player_score: self.match_state.player_score(),
            ai_score: self.match_state.ai_score(),
            winner: self.match_state.winner(),
            playing: self.match_state.is_playing(),
            paused: self.match_state.is_paused(),
            ball_speed: self.ball_speed(),
            ball: self.ball().map(|ball| BallView::from(&*ball)),
            player: self.paddle(Side::Player),
            ai: self.paddle(Side::Ai),
            particles: self.particles.clone(),
        }
    }
}
