//! Pointer drag to launch velocity mapping
//!
//! The player pulls back from the ball like a slingshot: the launch velocity
//! points opposite to the drag and is scaled down by the launch divisor.

use crate::{Config, Court};
use glam::Vec2;

/// An in-progress pointer drag, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub start: Vec2,
    pub current: Vec2,
}

impl DragGesture {
    pub fn begin(point: Vec2) -> Self {
        Self {
            start: point,
            current: point,
        }
    }

    pub fn update(&mut self, point: Vec2) {
        self.current = point;
    }

    /// Vector from where the drag started to where the pointer is now
    pub fn drag_vector(&self) -> Vec2 {
        self.current - self.start
    }

    /// Launch velocity for the current drag, or `None` if the drag is too
    /// short to count as a shot
    pub fn release(&self, config: &Config) -> Option<Vec2> {
        let drag = self.drag_vector();
        if drag.length() < config.min_drag {
            return None;
        }
        Some(launch_velocity(drag, config.launch_divisor))
    }
}

/// launch velocity = -(drag) / divisor
pub fn launch_velocity(drag: Vec2, divisor: f32) -> Vec2 {
    -drag / divisor
}

/// Ballistic preview of a shot for the aiming guide.
///
/// Uses the same integrator as the simulation and stops at the floor or the
/// side walls; bounces are not predicted.
pub fn predict_path(
    origin: Vec2,
    velocity: Vec2,
    config: &Config,
    court: &Court,
    steps: usize,
) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(steps);
    let mut pos = origin;
    let mut vel = velocity;

    for _ in 0..steps {
        vel.y += config.gravity;
        pos += vel;
        if pos.y + config.ball_radius >= court.floor_y
            || pos.x - config.ball_radius < court.left_wall()
            || pos.x + config.ball_radius > court.right_wall()
        {
            break;
        }
        points.push(pos);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_velocity_is_negated_drag_over_ten() {
        let v = launch_velocity(Vec2::new(-50.0, 80.0), 10.0);
        assert_eq!(v, Vec2::new(5.0, -8.0));
    }

    #[test]
    fn test_release_maps_drag() {
        let config = Config::new();
        let mut gesture = DragGesture::begin(Vec2::new(150.0, 450.0));
        gesture.update(Vec2::new(50.0, 600.0));

        assert_eq!(gesture.drag_vector(), Vec2::new(-100.0, 150.0));
        assert_eq!(gesture.release(&config), Some(Vec2::new(10.0, -15.0)));
    }

    #[test]
    fn test_short_drag_is_cancelled() {
        let config = Config::new();
        let mut gesture = DragGesture::begin(Vec2::new(100.0, 100.0));
        gesture.update(Vec2::new(102.0, 103.0));
        assert_eq!(gesture.release(&config), None);
    }

    #[test]
    fn test_predict_path_follows_integrator() {
        let config = Config::new();
        let court = Court::new(&config);
        let origin = Vec2::new(150.0, 300.0);
        let vel = Vec2::new(4.0, -6.0);

        let path = predict_path(origin, vel, &config, &court, 2);

        assert_eq!(path.len(), 2);
        let v1 = Vec2::new(4.0, -6.0 + config.gravity);
        let p1 = origin + v1;
        assert_eq!(path[0], p1);
        let v2 = v1 + Vec2::new(0.0, config.gravity);
        assert_eq!(path[1], p1 + v2);
    }

    #[test]
    fn test_predict_path_stops_at_floor() {
        let config = Config::new();
        let court = Court::new(&config);
        let path = predict_path(config.ball_origin, Vec2::new(1.0, 5.0), &config, &court, 500);
        assert!(path.len() < 500);
        for point in path {
            assert!(point.y + config.ball_radius < court.floor_y);
        }
    }
}
