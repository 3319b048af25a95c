/// Game tuning parameters for table tennis
///
/// Velocities are in pixels per step; the simulation is not frame-rate normalized.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (the drawing surface the table sits on)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 540.0;

    // Table
    pub const TABLE_X: f32 = 50.0;
    pub const TABLE_Y: f32 = 200.0;
    pub const TABLE_HEIGHT: f32 = 140.0;
    pub const NET_HEIGHT: f32 = 20.0;
    pub const NET_HALF_THICKNESS: f32 = 2.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    pub const PLAYER_PADDLE_GAP: f32 = 40.0; // below the table's bottom edge
    pub const AI_PADDLE_GAP: f32 = 52.0; // above the table's top edge
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const AI_SPEED: f32 = 5.5;
    pub const AI_DIFFICULTY: f32 = 0.85;

    // Controllers
    pub const PLAYER_EASING: f32 = 0.15;
    pub const AI_DEADBAND: f32 = 5.0;
    pub const AI_ERROR_SPAN: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const SERVE_VX: f32 = 4.0;
    pub const SERVE_VY: f32 = 3.0;
    pub const BALL_SPEED_MAX: f32 = 12.0;
    pub const TRAIL_LENGTH: usize = 8;

    // Spin
    pub const SPIN_TRANSFER: f32 = 0.1;
    pub const SPIN_DECAY: f32 = 0.99;

    // Paddle hits (tuned by feel, not derived)
    pub const PADDLE_BOOST: f32 = 0.5;
    pub const PLAYER_SWING_FACTOR: f32 = 0.3;
    pub const PLAYER_SWING_TO_VX: f32 = 0.3;
    pub const PLAYER_SWING_TO_SPIN: f32 = 0.05;
    pub const AI_OFFSET_TO_VX: f32 = 2.0;
    pub const AI_OFFSET_TO_SPIN: f32 = 0.1;

    // Score
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 50.0;
    pub const WIN_SCORE: u32 = 11;
    pub const WIN_MARGIN: u32 = 2;

    // Particles
    pub const PARTICLE_BURST: usize = 8;
    pub const PARTICLE_SPREAD: f32 = 4.0;
    pub const PARTICLE_DECAY: f32 = 0.02;
    pub const PARTICLE_DAMPING: f32 = 0.98;
    pub const PARTICLE_SHRINK: f32 = 0.98;
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_MAX: f32 = 6.0;

    // Colors (0xRRGGBB)
    pub const WALL_COLOR: u32 = 0xffffff;
    pub const NET_COLOR: u32 = 0xff6b6b;
    pub const PLAYER_COLOR: u32 = 0x4f46e5;
    pub const AI_COLOR: u32 = 0xdc2626;
}
