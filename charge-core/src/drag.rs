//! Pointer drag state machine for a charge set.
//!
//! The controller is either idle or dragging exactly one charge:
//! - a press inside a charge's disc grabs that charge (first one in
//!   iteration order when discs overlap);
//! - pointer moves teleport the grabbed charge to the pointer position;
//! - a release lets go wherever the pointer is.
//!
//! Presses that hit nothing are a no-op here; the viewers pan the camera
//! in that case. The transitions are plain methods over world-space
//! coordinates so the egui glue stays trivial and the machine itself is
//! unit-testable.

use crate::charge::ChargeSet;
use crate::types::ChargeId;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Dragging(ChargeId),
}

#[derive(Debug)]
pub struct DragController {
    state: State,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Handles a pointer press at `p`.
    ///
    /// If `p` falls within `hit_radius` of a charge's center, that charge
    /// is grabbed, its `dragging` flag is set, and `true` is returned.
    /// Otherwise the controller stays idle and returns `false`, letting
    /// the caller treat the press as something else (camera pan).
    pub fn press(&mut self, p: Vec2, charges: &mut ChargeSet, hit_radius: f32) -> bool {
        match charges.hit_test(p, hit_radius) {
            Some(id) => {
                charges.charges[id].dragging = true;
                self.state = State::Dragging(id);
                true
            }
            None => false,
        }
    }

    /// Moves the grabbed charge to `p`. Does nothing while idle.
    ///
    /// Only the grabbed charge is touched; all other charges keep their
    /// positions.
    pub fn drag_to(&mut self, p: Vec2, charges: &mut ChargeSet) {
        if let State::Dragging(id) = self.state {
            charges.charges[id].pos = p;
        }
    }

    /// Handles a pointer release, clearing the grab regardless of where
    /// the pointer is. Releasing while idle is a no-op.
    pub fn release(&mut self, charges: &mut ChargeSet) {
        if let State::Dragging(id) = self.state {
            charges.charges[id].dragging = false;
            self.state = State::Idle;
        }
    }

    /// The charge currently being dragged, if any.
    pub fn dragged(&self) -> Option<ChargeId> {
        match self.state {
            State::Dragging(id) => Some(id),
            State::Idle => None,
        }
    }
}
