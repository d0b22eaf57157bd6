//! Screen-space camera
//!
//! World units are canvas pixels with the origin top-left and y pointing down

use glam::{Mat4, Vec3, Vec4};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera covering a `width` x `height` canvas
    pub fn screen(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;

        // bottom = height, top = 0 flips y so it grows downward
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Where a canvas point lands in clip space
    pub fn to_clip(&self, x: f32, y: f32) -> Vec3 {
        let p = self.view_proj() * Vec4::new(x, y, 0.0, 1.0);
        p.truncate() / p.w
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_clip(camera: &Camera, x: f32, y: f32, expected: (f32, f32)) {
        let p = camera.to_clip(x, y);
        assert!(
            (p.x - expected.0).abs() < 1e-5 && (p.y - expected.1).abs() < 1e-5,
            "({x}, {y}) mapped to {p:?}, expected {expected:?}"
        );
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::screen(800.0, 600.0);
        assert_clip(&camera, 0.0, 0.0, (-1.0, 1.0));
        assert_clip(&camera, 800.0, 600.0, (1.0, -1.0));
        assert_clip(&camera, 400.0, 300.0, (0.0, 0.0));
    }

    #[test]
    fn test_depth_is_inside_clip_volume() {
        let z = Camera::screen(800.0, 600.0).to_clip(10.0, 10.0).z;
        assert!((0.0..=1.0).contains(&z));
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
