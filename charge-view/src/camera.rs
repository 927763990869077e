//! World↔screen coordinate mapping with pan and zoom.

use glam::Vec2;

/// A simple 2D camera: world coordinates are scaled by `zoom`, offset by
/// `pan`, and centered inside the drawing rect. The y-axis is flipped so
/// that positive y goes up in world space.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub zoom: f32,
    pub pan: egui::Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// A camera with no pan and 1:1 zoom, so world units equal pixels.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
        }
    }

    /// Converts a world-space position to screen-space.
    pub fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// Inverse of [`Camera::world_to_screen`] up to floating point
    /// rounding, using the same `zoom`, `pan`, and `rect` center.
    pub fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Zooms by a scroll amount, keeping the world point under
    /// `pointer_screen` fixed on screen.
    pub fn zoom_around(&mut self, pointer_screen: egui::Pos2, scroll: f32, rect: egui::Rect) {
        let world_before = self.screen_to_world(pointer_screen, rect);

        let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
        self.zoom = (self.zoom * factor).clamp(0.1, 10.0);

        let screen_after = self.world_to_screen(world_before, rect);
        self.pan += pointer_screen - screen_after;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        // Use non-trivial zoom and pan to exercise the math.
        let camera = Camera {
            zoom: 2.0,
            pan: egui::vec2(15.0, -7.0),
        };
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(133.0, -50.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-4;

        for p in world_points {
            let screen = camera.world_to_screen(p, rect);
            let back = camera.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn default_camera_maps_origin_to_rect_center() {
        let camera = Camera::new();
        let rect = test_rect();

        assert_eq!(camera.world_to_screen(Vec2::ZERO, rect), rect.center());
    }

    #[test]
    fn zoom_around_keeps_the_pointed_at_world_position() {
        let mut camera = Camera::new();
        let rect = test_rect();
        let pointer = egui::pos2(600.0, 150.0);

        let world_before = camera.screen_to_world(pointer, rect);
        camera.zoom_around(pointer, 500.0, rect);
        let world_after = camera.screen_to_world(pointer, rect);

        assert!(camera.zoom > 1.0, "scroll up should zoom in");
        assert!(
            (world_after - world_before).length() < 1e-2,
            "world point under the cursor moved: {world_before:?} -> {world_after:?}"
        );
    }
}
