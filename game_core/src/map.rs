use crate::Config;
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Court layout, in canvas pixels with y pointing down
#[derive(Debug, Clone)]
pub struct Court {
    pub width: f32,
    pub floor_y: f32,
    pub hoop: Aabb,
    pub backboard: Aabb,
    pub ball_origin: Vec2,
}

impl Court {
    pub fn new(config: &Config) -> Self {
        let hoop = Aabb::from_center_size(config.hoop_center, config.hoop_size);

        // Backboard stands just behind the far end of the rim
        let backboard_center = Vec2::new(
            hoop.max.x + config.backboard_size.x * 0.5,
            hoop.min.y - config.backboard_size.y * 0.5 + config.hoop_size.y,
        );

        Self {
            width: config.canvas_width,
            floor_y: config.canvas_height,
            hoop,
            backboard: Aabb::from_center_size(backboard_center, config.backboard_size),
            ball_origin: config.ball_origin,
        }
    }

    pub fn left_wall(&self) -> f32 {
        0.0
    }

    pub fn right_wall(&self) -> f32 {
        self.width
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_contains_edges() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0));
        assert!(aabb.contains(Vec2::new(0.0, 0.0)));
        assert!(aabb.contains(Vec2::new(10.0, 5.0)));
        assert!(!aabb.contains(Vec2::new(10.1, 2.0)));
    }

    #[test]
    fn test_court_hoop_matches_config() {
        let config = Config::new();
        let court = Court::new(&config);
        assert_eq!(court.hoop.center(), config.hoop_center);
        assert_eq!(court.hoop.size(), config.hoop_size);
        assert_eq!(court.floor_y, config.canvas_height);
    }

    #[test]
    fn test_backboard_behind_rim() {
        let court = Court::default();
        assert!(court.backboard.min.x >= court.hoop.max.x);
        assert!(court.backboard.max.y >= court.hoop.min.y);
    }
}
