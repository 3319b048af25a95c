use glam::Vec2;
use serde::Serialize;

use crate::config::Config;
use crate::error::ConfigError;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and a size
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if a circle's bounding box touches this box (edges inclusive)
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius >= self.min.x
            && center.x - radius <= self.max.x
            && center.y + radius >= self.min.y
            && center.y - radius <= self.max.y
    }
}

/// Playing surface: the table rectangle, its net, and the arena it sits in.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    bounds: Aabb,
    net_height: f32,
    arena: Vec2,
}

impl Table {
    pub fn new(bounds: Aabb, net_height: f32, arena: Vec2) -> Result<Self, ConfigError> {
        if !(arena.x > 0.0) || !(arena.y > 0.0) {
            return Err(ConfigError::InvalidArena {
                width: arena.x,
                height: arena.y,
            });
        }
        if !(bounds.width() > 0.0) || !(bounds.height() > 0.0) {
            return Err(ConfigError::InvalidTable {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        if !(net_height >= 0.0) {
            return Err(ConfigError::InvalidNetHeight(net_height));
        }
        Ok(Self {
            bounds,
            net_height,
            arena,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(
            Aabb::from_corner_size(
                Vec2::new(config.table_x, config.table_y),
                Vec2::new(config.table_width, config.table_height),
            ),
            config.net_height,
            Vec2::new(config.arena_width, config.arena_height),
        )
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn left(&self) -> f32 {
        self.bounds.min.x
    }

    pub fn right(&self) -> f32 {
        self.bounds.max.x
    }

    pub fn top(&self) -> f32 {
        self.bounds.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.bounds.max.y
    }

    pub fn net_height(&self) -> f32 {
        self.net_height
    }

    /// X coordinate of the net (vertical centerline)
    pub fn net_x(&self) -> f32 {
        self.bounds.center().x
    }

    /// Y coordinate splitting the AI half (above) from the player half (below)
    pub fn mid_y(&self) -> f32 {
        self.bounds.center().y
    }

    pub fn arena_width(&self) -> f32 {
        self.arena.x
    }

    pub fn arena_height(&self) -> f32 {
        self.arena.y
    }

    /// Serve position: the table center
    pub fn ball_spawn(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Clamp a paddle's left edge so the paddle stays over the table
    pub fn clamp_paddle_x(&self, x: f32, paddle_width: f32) -> f32 {
        x.clamp(self.left(), (self.right() - paddle_width).max(self.left()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_corner_size(Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0))
    }

    #[test]
    fn test_circle_inside_box_overlaps() {
        assert!(unit_box().overlaps_circle(Vec2::new(20.0, 15.0), 2.0));
    }

    #[test]
    fn test_circle_touching_edge_overlaps() {
        // Bounds are inclusive: exactly touching counts
        assert!(unit_box().overlaps_circle(Vec2::new(5.0, 15.0), 5.0));
        assert!(unit_box().overlaps_circle(Vec2::new(20.0, 25.0), 5.0));
    }

    #[test]
    fn test_circle_clear_of_box_does_not_overlap() {
        assert!(!unit_box().overlaps_circle(Vec2::new(4.9, 15.0), 5.0));
        assert!(!unit_box().overlaps_circle(Vec2::new(20.0, 30.0), 5.0));
    }

    #[test]
    fn test_table_from_default_config() {
        let table = Table::from_config(&Config::new()).unwrap();
        assert_eq!(table.left(), 50.0);
        assert_eq!(table.right(), 750.0);
        assert_eq!(table.top(), 200.0);
        assert_eq!(table.bottom(), 340.0);
        assert_eq!(table.net_x(), 400.0);
        assert_eq!(table.ball_spawn(), Vec2::new(400.0, 270.0));
        assert_eq!(table.ball_spawn(), table.bounds().center());
    }

    #[test]
    fn test_off_center_table_serves_from_table_center() {
        let config = Config {
            table_y: 100.0,
            ..Config::new()
        };
        let table = Table::from_config(&config).unwrap();
        assert_eq!(table.ball_spawn(), Vec2::new(400.0, 170.0));
        assert_ne!(table.ball_spawn(), Vec2::new(table.arena_width(), table.arena_height()) * 0.5);
    }

    #[test]
    fn test_table_rejects_degenerate_bounds() {
        let bounds = Aabb::from_corner_size(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!(Table::new(bounds, 20.0, Vec2::new(100.0, 100.0)).is_err());
    }

    #[test]
    fn test_clamp_paddle_x() {
        let table = Table::from_config(&Config::new()).unwrap();
        assert_eq!(table.clamp_paddle_x(0.0, 80.0), 50.0);
        assert_eq!(table.clamp_paddle_x(1000.0, 80.0), 670.0);
        assert_eq!(table.clamp_paddle_x(300.0, 80.0), 300.0);
    }
}
