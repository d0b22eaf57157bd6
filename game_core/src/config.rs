use crate::Params;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be in (0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("hoop must lie inside the {width}x{height} canvas")]
    HoopOutsideCanvas { width: f32, height: f32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ball_radius: f32,
    pub ball_origin: glam::Vec2,
    pub gravity: f32,
    pub restitution: f32,
    pub friction: f32,
    pub rest_speed: f32,
    pub launch_divisor: f32,
    pub min_drag: f32,
    pub hoop_center: glam::Vec2,
    pub hoop_size: glam::Vec2,
    pub backboard_size: glam::Vec2,
    pub points_per_basket: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_origin: glam::Vec2::new(Params::BALL_ORIGIN_X, Params::BALL_ORIGIN_Y),
            gravity: Params::GRAVITY,
            restitution: Params::RESTITUTION,
            friction: Params::FRICTION,
            rest_speed: Params::REST_SPEED,
            launch_divisor: Params::LAUNCH_DIVISOR,
            min_drag: Params::MIN_DRAG,
            hoop_center: glam::Vec2::new(Params::HOOP_CENTER_X, Params::HOOP_CENTER_Y),
            hoop_size: glam::Vec2::new(Params::HOOP_WIDTH, Params::HOOP_HEIGHT),
            backboard_size: glam::Vec2::new(Params::BACKBOARD_WIDTH, Params::BACKBOARD_HEIGHT),
            points_per_basket: Params::POINTS_PER_BASKET,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject tuning that would make the simulation non-physical
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("restitution", self.restitution),
            ("friction", self.friction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }

        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("ball_radius", self.ball_radius),
            ("launch_divisor", self.launch_divisor),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let half = self.hoop_size * 0.5;
        let min = self.hoop_center - half;
        let max = self.hoop_center + half;
        if min.x < 0.0 || min.y < 0.0 || max.x > self.canvas_width || max.y > self.canvas_height {
            return Err(ConfigError::HoopOutsideCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        Ok(())
    }

    /// Y coordinate of the ball centre when it rests on the floor
    pub fn floor_contact_y(&self) -> f32 {
        self.canvas_height - self.ball_radius
    }
}
