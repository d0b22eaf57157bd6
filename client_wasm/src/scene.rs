//! Flattens the game session into GPU instances
//!
//! Everything is drawn as one of two meshes: a unit square and a circle of
//! unit diameter. Each instance places and stretches the mesh in canvas
//! pixels.

use game_core::{Aabb, GameSession};
use glam::Vec2;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn rect(aabb: &Aabb, tint: [f32; 4]) -> Self {
        let c = aabb.center();
        let s = aabb.size();
        Self {
            transform: [c.x, c.y, s.x, s.y],
            tint,
        }
    }

    pub fn circle(center: Vec2, radius: f32, tint: [f32; 4]) -> Self {
        Self {
            transform: [center.x, center.y, radius * 2.0, radius * 2.0],
            tint,
        }
    }
}

pub const BACKGROUND: [f64; 4] = [0.05, 0.06, 0.09, 1.0];
const FLOOR_COLOR: [f32; 4] = [0.55, 0.36, 0.2, 1.0];
const POLE_COLOR: [f32; 4] = [0.35, 0.35, 0.4, 1.0];
const BACKBOARD_COLOR: [f32; 4] = [0.92, 0.92, 0.95, 1.0];
const RIM_COLOR: [f32; 4] = [0.95, 0.3, 0.1, 1.0];
const BALL_COLOR: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
const AIM_COLOR: [f32; 4] = [0.6, 0.65, 0.75, 0.6];

const FLOOR_THICKNESS: f32 = 6.0;
const POLE_WIDTH: f32 = 8.0;
const AIM_DOT_RADIUS: f32 = 3.0;

/// Instances for one frame, in draw order
#[derive(Debug, Default)]
pub struct Scene {
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

pub fn build_scene(session: &GameSession) -> Scene {
    let court = session.court();
    let config = session.config();
    let mut scene = Scene::default();

    scene.rects.push(InstanceData::rect(
        &Aabb::new(
            Vec2::new(0.0, court.floor_y - FLOOR_THICKNESS),
            Vec2::new(court.width, court.floor_y),
        ),
        FLOOR_COLOR,
    ));

    // Pole from the bottom of the backboard to the floor
    let pole_x = court.backboard.center().x + POLE_WIDTH;
    scene.rects.push(InstanceData::rect(
        &Aabb::new(
            Vec2::new(pole_x - POLE_WIDTH * 0.5, court.backboard.max.y),
            Vec2::new(pole_x + POLE_WIDTH * 0.5, court.floor_y - FLOOR_THICKNESS),
        ),
        POLE_COLOR,
    ));
    scene
        .rects
        .push(InstanceData::rect(&court.backboard, BACKBOARD_COLOR));
    scene.rects.push(InstanceData::rect(&court.hoop, RIM_COLOR));

    for point in session.aim_preview() {
        scene
            .circles
            .push(InstanceData::circle(point, AIM_DOT_RADIUS, AIM_COLOR));
    }

    // Ball last so it sits on top of the guide
    if let Some(ball) = session.ball() {
        scene
            .circles
            .push(InstanceData::circle(ball.pos, config.ball_radius, BALL_COLOR));
    }

    scene
}
