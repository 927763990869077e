//! Electric field evaluation.
//!
//! The field of a point charge falls off with the inverse square of the
//! distance and points away from positive sources (the charge's sign rides
//! along on the magnitude, so negative sources naturally point inward).
//! Net fields are plain vector sums over all sources (superposition), and
//! [`FieldGrid`] provides the fixed-step lattice of sample points the field
//! viewer draws arrows at.

use crate::charge::{Charge, ChargeSet};
use glam::Vec2;

/// Field contribution of a single `source` charge at `point`.
///
/// Magnitude is `k * source.magnitude / d²` and the direction is the unit
/// displacement from the source to the sample point. A sample point
/// coincident with the source returns exactly `Vec2::ZERO` instead of
/// dividing by zero.
///
/// ### Parameters
/// - `source` - The charge generating the field.
/// - `point` - World-space sample point.
/// - `k` - Coulomb's constant.
///
/// ### Returns
/// The field vector at `point` due to `source` alone.
pub fn contribution(source: &Charge, point: Vec2, k: f32) -> Vec2 {
    let d = point - source.pos;
    let dist_sq = d.length_squared();

    if dist_sq == 0.0 {
        return Vec2::ZERO;
    }

    let dist = dist_sq.sqrt();
    let magnitude = k * source.magnitude / dist_sq;

    (d / dist) * magnitude
}

/// Net field at `point`: the vector sum of every charge's contribution.
pub fn at(set: &ChargeSet, point: Vec2, k: f32) -> Vec2 {
    set.charges
        .iter()
        .fold(Vec2::ZERO, |acc, c| acc + contribution(c, point, k))
}

/// A fixed-step lattice of sample points covering a world-space rectangle.
///
/// Sample coordinates are snapped to multiples of `step`, so a grid built
/// from a panned viewport yields the same world-space points as before the
/// pan and the drawn arrows stay anchored.
#[derive(Clone, Copy, Debug)]
pub struct FieldGrid {
    pub min: Vec2,
    pub max: Vec2,
    pub step: f32,
}

impl FieldGrid {
    pub fn new(min: Vec2, max: Vec2, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Iterates over all lattice points inside the rectangle, in column
    /// order. An empty rectangle (or a non-positive step) yields nothing.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        let step = self.step;
        let valid = step > 0.0 && self.min.x <= self.max.x && self.min.y <= self.max.y;

        // First lattice coordinates at or after `min` on each axis.
        let x0 = (self.min.x / step).ceil() * step;
        let y0 = (self.min.y / step).ceil() * step;

        let nx = if valid {
            ((self.max.x - x0) / step).floor() as i64 + 1
        } else {
            0
        };
        let ny = if valid {
            ((self.max.y - y0) / step).floor() as i64 + 1
        } else {
            0
        };

        (0..nx.max(0)).flat_map(move |i| {
            (0..ny.max(0)).map(move |j| Vec2::new(x0 + i as f32 * step, y0 + j as f32 * step))
        })
    }
}
