//! Pointer input handling

use glam::Vec2;

/// The canvas's on-screen box in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map pointer client coordinates into canvas pixels.
///
/// The canvas may be displayed at a different CSS size than its backing
/// resolution, so offsets are rescaled per axis.
pub fn canvas_point(
    client_x: f32,
    client_y: f32,
    rect: CanvasRect,
    canvas_width: f32,
    canvas_height: f32,
) -> Vec2 {
    let scale_x = if rect.width > 0.0 {
        canvas_width / rect.width
    } else {
        1.0
    };
    let scale_y = if rect.height > 0.0 {
        canvas_height / rect.height
    } else {
        1.0
    };

    Vec2::new(
        (client_x - rect.left) * scale_x,
        (client_y - rect.top) * scale_y,
    )
}

/// Read the canvas bounding box from the DOM
#[cfg(target_arch = "wasm32")]
pub fn canvas_rect(canvas: &web_sys::HtmlCanvasElement) -> CanvasRect {
    let r = canvas.get_bounding_client_rect();
    CanvasRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f32, top: f32, width: f32, height: f32) -> CanvasRect {
        CanvasRect {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn test_unscaled_canvas_subtracts_offset() {
        let p = canvas_point(160.0, 470.0, rect(10.0, 20.0, 800.0, 600.0), 800.0, 600.0);
        assert_eq!(p, Vec2::new(150.0, 450.0));
    }

    #[test]
    fn test_css_scaling_is_honoured() {
        // Canvas shown at half size
        let p = canvas_point(200.0, 150.0, rect(0.0, 0.0, 400.0, 300.0), 800.0, 600.0);
        assert_eq!(p, Vec2::new(400.0, 300.0));

        // Non-uniform stretch
        let p = canvas_point(100.0, 100.0, rect(0.0, 0.0, 1600.0, 300.0), 800.0, 600.0);
        assert_eq!(p, Vec2::new(50.0, 200.0));
    }

    #[test]
    fn test_degenerate_rect_does_not_divide_by_zero() {
        let p = canvas_point(30.0, 40.0, rect(10.0, 10.0, 0.0, 0.0), 800.0, 600.0);
        assert_eq!(p, Vec2::new(20.0, 30.0));
    }
}
