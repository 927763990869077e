use crate::types::ChargeId;
use glam::Vec2;

/// Sign of a charge's magnitude, used for display color selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Clone, Copy, Debug)]
pub struct Charge {
    pub pos: Vec2,
    /// Signed magnitude. Arbitrary scale, not SI-consistent.
    pub magnitude: f32,
    pub dragging: bool,
}

#[derive(Debug)]
pub struct ChargeSet {
    pub charges: Vec<Charge>,
}

impl Charge {
    pub fn new(pos: Vec2, magnitude: f32) -> Self {
        Self {
            pos,
            magnitude,
            dragging: false,
        }
    }

    /// Derived from the magnitude's sign; zero counts as negative so a
    /// charge dialed through zero keeps a stable color.
    pub fn polarity(&self) -> Polarity {
        if self.magnitude > 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

impl ChargeSet {
    pub fn from_charges(charges: Vec<Charge>) -> Self {
        Self { charges }
    }

    /// Finds the first charge whose disc of the given radius contains `p`.
    ///
    /// The boundary is inclusive, and when discs overlap the first charge
    /// in iteration order wins.
    pub fn hit_test(&self, p: Vec2, radius: f32) -> Option<ChargeId> {
        self.charges
            .iter()
            .position(|c| (p - c.pos).length_squared() <= radius * radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_follows_magnitude_sign() {
        assert_eq!(
            Charge::new(Vec2::ZERO, 1e-6).polarity(),
            Polarity::Positive
        );
        assert_eq!(
            Charge::new(Vec2::ZERO, -1e-6).polarity(),
            Polarity::Negative
        );
        assert_eq!(Charge::new(Vec2::ZERO, 0.0).polarity(), Polarity::Negative);
    }

    #[test]
    fn hit_test_is_boundary_inclusive() {
        let set = ChargeSet::from_charges(vec![Charge::new(Vec2::new(100.0, 50.0), 1.0)]);

        // Exact center.
        assert_eq!(set.hit_test(Vec2::new(100.0, 50.0), 15.0), Some(0));
        // Exactly on the boundary.
        assert_eq!(set.hit_test(Vec2::new(115.0, 50.0), 15.0), Some(0));
        // One unit outside the boundary.
        assert_eq!(set.hit_test(Vec2::new(116.0, 50.0), 15.0), None);
    }

    #[test]
    fn hit_test_prefers_first_charge_when_discs_overlap() {
        // Two charges one unit apart, both discs cover the probe point.
        let set = ChargeSet::from_charges(vec![
            Charge::new(Vec2::new(0.0, 0.0), 1.0),
            Charge::new(Vec2::new(1.0, 0.0), -1.0),
        ]);

        assert_eq!(set.hit_test(Vec2::new(0.5, 0.0), 15.0), Some(0));
    }
}
