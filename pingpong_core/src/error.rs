use thiserror::Error;

use crate::components::Side;

/// Rejected construction parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Arena must have positive size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    #[error("Table must have positive size, got {width}x{height}")]
    InvalidTable { width: f32, height: f32 },

    #[error("Table does not fit inside the arena")]
    TableOutsideArena,

    #[error("Net height must not be negative, got {0}")]
    InvalidNetHeight(f32),

    #[error("Paddle must have positive size, got {width}x{height}")]
    InvalidPaddle { width: f32, height: f32 },

    #[error("Paddle of width {paddle_width} does not fit a table of width {table_width}")]
    PaddleWiderThanTable { paddle_width: f32, table_width: f32 },

    #[error("{side:?} paddle speed must be positive, got {speed}")]
    InvalidPaddleSpeed { side: Side, speed: f32 },

    #[error("AI difficulty must be within [0, 1], got {0}")]
    InvalidDifficulty(f32),

    #[error("Ball radius must be positive, got {0}")]
    InvalidBallRadius(f32),

    #[error("Serve speeds must be positive, got ({vx}, {vy})")]
    InvalidServe { vx: f32, vy: f32 },

    #[error("Maximum ball speed must be positive, got {0}")]
    InvalidMaxSpeed(f32),

    #[error("Trail length must be at least 1")]
    EmptyTrail,
}
