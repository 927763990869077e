//! Interactive eframe/egui viewers for the 2-D electrostatics demos.
//!
//! Two binaries share this crate:
//! - `charge-forces` — net Coulomb force arrows on three draggable charges
//!   ([`force_viewer`]).
//! - `charge-field` — an electric-field arrow grid for two draggable
//!   charges ([`field_viewer`]).
//!
//! [`camera`] provides the shared world↔screen mapping and [`draw`] the
//! shared painting helpers.

pub mod camera;
pub mod draw;
pub mod field_viewer;
pub mod force_viewer;
