use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub table_x: f32,
    pub table_y: f32,
    pub table_width: f32,
    pub table_height: f32,
    pub net_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_gap: f32,
    pub ai_paddle_gap: f32,
    pub player_speed: f32,
    pub ai_speed: f32,
    pub ai_difficulty: f32,
    pub ball_radius: f32,
    pub serve_vx: f32,
    pub serve_vy: f32,
    pub ball_speed_max: f32,
    pub trail_length: usize,
    pub particle_burst: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            table_x: Params::TABLE_X,
            table_y: Params::TABLE_Y,
            table_width: Params::ARENA_WIDTH - 2.0 * Params::TABLE_X,
            table_height: Params::TABLE_HEIGHT,
            net_height: Params::NET_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_paddle_gap: Params::PLAYER_PADDLE_GAP,
            ai_paddle_gap: Params::AI_PADDLE_GAP,
            player_speed: Params::PLAYER_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_difficulty: Params::AI_DIFFICULTY,
            ball_radius: Params::BALL_RADIUS,
            serve_vx: Params::SERVE_VX,
            serve_vy: Params::SERVE_VY,
            ball_speed_max: Params::BALL_SPEED_MAX,
            trail_length: Params::TRAIL_LENGTH,
            particle_burst: Params::PARTICLE_BURST,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject parameters the simulation cannot run with.
    ///
    /// Comparisons are written as `!(v > 0.0)` so NaN is rejected too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_width > 0.0) || !(self.arena_height > 0.0) {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !(self.table_width > 0.0) || !(self.table_height > 0.0) {
            return Err(ConfigError::InvalidTable {
                width: self.table_width,
                height: self.table_height,
            });
        }
        if self.table_x < 0.0
            || self.table_y < 0.0
            || self.table_x + self.table_width > self.arena_width
            || self.table_y + self.table_height > self.arena_height
        {
            return Err(ConfigError::TableOutsideArena);
        }
        if !(self.net_height >= 0.0) {
            return Err(ConfigError::InvalidNetHeight(self.net_height));
        }
        if !(self.paddle_width > 0.0) || !(self.paddle_height > 0.0) {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_width > self.table_width {
            return Err(ConfigError::PaddleWiderThanTable {
                paddle_width: self.paddle_width,
                table_width: self.table_width,
            });
        }
        if !(self.player_speed > 0.0) {
            return Err(ConfigError::InvalidPaddleSpeed {
                side: Side::Player,
                speed: self.player_speed,
            });
        }
        if !(self.ai_speed > 0.0) {
            return Err(ConfigError::InvalidPaddleSpeed {
                side: Side::Ai,
                speed: self.ai_speed,
            });
        }
        if !(0.0..=1.0).contains(&self.ai_difficulty) {
            return Err(ConfigError::InvalidDifficulty(self.ai_difficulty));
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::InvalidBallRadius(self.ball_radius));
        }
        if !(self.serve_vx > 0.0) || !(self.serve_vy > 0.0) {
            return Err(ConfigError::InvalidServe {
                vx: self.serve_vx,
                vy: self.serve_vy,
            });
        }
        if !(self.ball_speed_max > 0.0) {
            return Err(ConfigError::InvalidMaxSpeed(self.ball_speed_max));
        }
        if self.trail_length == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        Ok(())
    }

    /// Top edge of the given side's paddle
    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.table_y + self.table_height + self.player_paddle_gap,
            Side::Ai => self.table_y - self.ai_paddle_gap,
        }
    }

    /// Paddle speed in pixels per step
    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_speed,
            Side::Ai => self.ai_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_default_table_spans_arena_minus_margins() {
        let config = Config::new();
        assert_eq!(config.table_width, 700.0);
        assert_eq!(config.table_x + config.table_width, config.arena_width - 50.0);
    }

    #[test]
    fn test_config_paddle_y() {
        let config = Config::new();
        assert_eq!(config.paddle_y(Side::Player), 380.0, "Player paddle Y position");
        assert_eq!(config.paddle_y(Side::Ai), 148.0, "AI paddle Y position");
    }

    #[test]
    fn test_rejects_non_positive_table() {
        let config = Config {
            table_height: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_paddle_speed() {
        let config = Config {
            ai_speed: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPaddleSpeed {
                side: Side::Ai,
                speed: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_nan_dimensions() {
        let config = Config {
            arena_width: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidArena { .. })
        ));
    }

    #[test]
    fn test_rejects_difficulty_out_of_range() {
        let config = Config {
            ai_difficulty: 1.5,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDifficulty(1.5)));
    }

    #[test]
    fn test_rejects_table_outside_arena() {
        let config = Config {
            table_width: 900.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::TableOutsideArena));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: Config = serde_json::from_str(r#"{"ai_difficulty":0.5}"#).unwrap();
        assert_eq!(config.ai_difficulty, 0.5);
        assert_eq!(
            config,
            Config {
                ai_difficulty: 0.5,
                ..Config::new()
            }
        );
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config {
            table_y: 120.0,
            trail_length: 12,
            ..Config::new()
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_empty_trail() {
        let config = Config {
            trail_length: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyTrail));
    }
}
