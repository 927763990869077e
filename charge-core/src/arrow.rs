//! Vector arrow geometry.
//!
//! Arrows are a straight segment plus a triangular head. The head's two
//! back-edge vertices sit `head_size` away from the tip, at ±30° off the
//! segment's reversed direction, so the viewer only has to paint a line
//! and a convex polygon.

use glam::Vec2;
use std::f32::consts::FRAC_PI_6;

/// Geometry of one arrow, in whatever space `start`/`end` were given in.
#[derive(Clone, Copy, Debug)]
pub struct Arrow {
    pub start: Vec2,
    pub end: Vec2,
    /// Head triangle: the two back-edge vertices, then the tip.
    pub head: [Vec2; 3],
}

impl Arrow {
    /// Builds an arrow from `start` to `end` with a head of `head_size`.
    ///
    /// The head angle comes from `atan2` of the delta; a degenerate arrow
    /// with `start == end` gets a head pointing along +x.
    pub fn new(start: Vec2, end: Vec2, head_size: f32) -> Self {
        let delta = end - start;
        let angle = delta.y.atan2(delta.x);

        let back = |offset: f32| {
            let a = angle + offset;
            end - Vec2::new(a.cos(), a.sin()) * head_size
        };

        Self {
            start,
            end,
            head: [back(-FRAC_PI_6), back(FRAC_PI_6), end],
        }
    }
}

/// Rescales `v` to the given display length.
///
/// A zero vector has no direction and stays zero; callers skip drawing in
/// that case. Mirrors the demos' fixed-length arrow scaling.
pub fn scaled_to(v: Vec2, length: f32) -> Vec2 {
    v.normalize_or_zero() * length
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn head_vertices_sit_head_size_behind_the_tip() {
        let arrow = Arrow::new(Vec2::new(10.0, -20.0), Vec2::new(-35.0, 60.0), 10.0);

        for v in &arrow.head[..2] {
            let d = (*v - arrow.end).length();
            assert!((d - 10.0).abs() < EPS, "back vertex at distance {d}");
        }
        assert_eq!(arrow.head[2], arrow.end);
    }

    #[test]
    fn head_for_an_axis_aligned_arrow() {
        // Arrow along +x: back vertices are head_size behind the tip,
        // offset by ±(head_size · sin 30°) = ±5 in y.
        let arrow = Arrow::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 10.0);

        let expected_x = 100.0 - 10.0 * FRAC_PI_6.cos();
        let [a, b, tip] = arrow.head;

        assert!((a.x - expected_x).abs() < EPS);
        assert!((b.x - expected_x).abs() < EPS);
        assert!((a.y - 5.0).abs() < EPS, "got {a:?}");
        assert!((b.y + 5.0).abs() < EPS, "got {b:?}");
        assert_eq!(tip, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn back_edge_spread_is_thirty_degrees_each_side() {
        let arrow = Arrow::new(Vec2::new(3.0, 4.0), Vec2::new(-50.0, 17.0), 8.0);
        let dir = (arrow.end - arrow.start).normalize();

        for v in &arrow.head[..2] {
            let to_back = (*v - arrow.end).normalize();
            // Angle between the reversed shaft direction and the back edge.
            let cos = to_back.dot(-dir);
            assert!((cos - FRAC_PI_6.cos()).abs() < EPS, "cos {cos}");
        }
    }

    #[test]
    fn scaled_to_fixes_the_length_and_keeps_direction() {
        let v = Vec2::new(3.0, -4.0);
        let s = scaled_to(v, 100.0);

        assert!((s.length() - 100.0).abs() < EPS);
        assert!((s.normalize() - v.normalize()).length() < EPS);
    }

    #[test]
    fn scaled_zero_vector_stays_zero() {
        assert_eq!(scaled_to(Vec2::ZERO, 100.0), Vec2::ZERO);
    }
}
