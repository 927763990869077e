//! Coulomb forces between charges.
//!
//! The force on a charge is its magnitude times the electric field the
//! other charges produce at its position, so everything here reduces to
//! [`crate::field`]. That keeps a single sign convention: like signs repel,
//! opposite signs attract, and superposition carries over from the field
//! sum.

use crate::charge::{Charge, ChargeSet};
use crate::field;
use crate::types::ChargeId;
use glam::Vec2;

/// Force exerted on `target` by a single `other` charge.
///
/// Coincident charges exert no force on each other (the zero-distance
/// guard in [`field::contribution`] yields `Vec2::ZERO`).
pub fn between(target: &Charge, other: &Charge, k: f32) -> Vec2 {
    field::contribution(other, target.pos, k) * target.magnitude
}

/// Net force on the charge at `target` due to every other charge in the set.
///
/// The target itself is excluded from the sum by index, so two distinct
/// charges that happen to coincide still interact (and contribute zero,
/// per the singularity guard).
///
/// ### Parameters
/// - `target` - Index of the charge the force acts on.
/// - `set` - The full charge set, target included.
/// - `k` - Coulomb's constant.
///
/// ### Returns
/// The vector sum of all pairwise forces on the target.
pub fn net_on(target: ChargeId, set: &ChargeSet, k: f32) -> Vec2 {
    let t = &set.charges[target];

    set.charges
        .iter()
        .enumerate()
        .filter(|(id, _)| *id != target)
        .fold(Vec2::ZERO, |acc, (_, other)| acc + between(t, other, k))
}
