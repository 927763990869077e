//! Core 2-D electrostatics library for the interactive charge demos.
//!
//! Main components:
//! - [`charge`] — point charges and charge sets.
//! - [`field`] — electric field evaluation and the sampling grid.
//! - [`force`] — Coulomb forces between charges.
//! - [`arrow`] — vector arrow geometry for rendering.
//! - [`drag`] — the pointer drag state machine over a charge set.
//! - [`config`] — shared physics / display constants.
//! - [`types`] — shared type aliases and IDs.

pub mod arrow;
pub mod charge;
pub mod config;
pub mod drag;
pub mod field;
pub mod force;
pub mod types;
