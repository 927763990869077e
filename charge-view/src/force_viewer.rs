//! Interactive Coulomb force viewer built with eframe/egui.
//!
//! This module defines [`ForceViewer`], which owns the charge set and
//! implements [`eframe::App`] to draw each charge, the net Coulomb force
//! acting on it, and the force magnitude at the arrow tip. Charges can be
//! dragged with the pointer; empty-space drags pan the camera and the
//! scroll wheel zooms around the cursor.

use crate::camera::Camera;
use crate::draw;
use charge_core::{
    arrow,
    charge::{Charge, ChargeSet},
    config::Config,
    drag::DragController,
    force,
};
use eframe::App;
use glam::Vec2;

/// Main application state for the force demo.
///
/// [`ForceViewer`] glues together:
/// - The simulation core: [`ChargeSet`], [`Config`], [`DragController`].
/// - The [`Camera`] for pan/zoom world-to-screen mapping.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle pointer input (grab/move/release a charge, pan, zoom).
/// 2. Recompute every charge's net force from scratch.
/// 3. Draw charge discs, force arrows, and magnitude labels.
///
/// ### Fields
/// - `charges` - The fixed set of three demo charges.
/// - `cfg` - Physics and display constants, tweakable from the side panel.
/// - `camera` - World↔screen mapping (zoom and pan).
/// - `drag` - Idle/Dragging state machine over the charge set.
/// - `panning` - Whether the current pointer drag moves the camera
///   instead of a charge.
pub struct ForceViewer {
    charges: ChargeSet,
    cfg: Config,
    camera: Camera,
    drag: DragController,
    panning: bool,
}

/// The demo's fixed charge layout: one positive and two negative charges
/// on the horizontal axis (world origin at the window center).
fn initial_charges() -> Vec<Charge> {
    vec![
        Charge::new(Vec2::new(-133.0, 0.0), 1e-6),
        Charge::new(Vec2::new(133.0, 0.0), -1e-6),
        Charge::new(Vec2::new(400.0, 0.0), -2e-6),
    ]
}

impl Default for ForceViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceViewer {
    /// Creates a viewer with the fixed three-charge layout, default
    /// configuration, and an untouched camera.
    pub fn new() -> Self {
        Self {
            charges: ChargeSet::from_charges(initial_charges()),
            cfg: Config::default(),
            camera: Camera::new(),
            drag: DragController::new(),
            panning: false,
        }
    }

    /// Restores the initial charge layout and drops any active drag.
    ///
    /// The configuration and camera are kept: "Reset" rewinds the scene,
    /// not the settings.
    fn reset(&mut self) {
        self.charges = ChargeSet::from_charges(initial_charges());
        self.drag = DragController::new();
        self.panning = false;
    }

    /// Builds the top panel UI (reset, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.camera.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (charge count, active drag).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("zoom = {:.2}", self.camera.zoom));
                ui.separator();
                ui.label(format!("charges = {}", self.charges.charges.len()));
                ui.label(match self.drag.dragged() {
                    Some(id) => format!("dragging = #{id}"),
                    None => "dragging = none".to_owned(),
                });
            });
        });
    }

    /// Builds the right-hand configuration panel.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Physics");
                draw::labeled_drag_f32(ui, "k:", &mut self.cfg.coulomb_k, 1e8..=1e11, 1e8);

                ui.separator();
                ui.label("Display");
                draw::labeled_drag_f32(
                    ui,
                    "charge_radius:",
                    &mut self.cfg.charge_radius,
                    2.0..=60.0,
                    0.5,
                );
                draw::labeled_drag_f32(
                    ui,
                    "arrow_length:",
                    &mut self.cfg.force_arrow_length,
                    10.0..=300.0,
                    1.0,
                );
                draw::labeled_drag_f32(
                    ui,
                    "head_size:",
                    &mut self.cfg.arrow_head_size,
                    2.0..=30.0,
                    0.5,
                );

                ui.separator();
                ui.label("Charge magnitudes (C)");
                for (id, c) in self.charges.charges.iter_mut().enumerate() {
                    draw::labeled_drag_f32(
                        ui,
                        &format!("q{id}:"),
                        &mut c.magnitude,
                        -1e-5..=1e-5,
                        1e-7,
                    );
                }

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }
            });
    }

    /// Builds the central panel where charges and force arrows are drawn
    /// and interacted with.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::WHITE);

            // A drag on a charge grabs it; a drag on empty space pans.
            if response.drag_started()
                && let Some(p) = response.interact_pointer_pos()
            {
                let world = self.camera.screen_to_world(p, rect);
                let grabbed = self.drag.press(world, &mut self.charges, self.cfg.charge_radius);
                self.panning = !grabbed;
            }

            if response.dragged() {
                if self.drag.dragged().is_some() {
                    if let Some(p) = response.interact_pointer_pos() {
                        let world = self.camera.screen_to_world(p, rect);
                        self.drag.drag_to(world, &mut self.charges);
                    }
                } else if self.panning {
                    self.camera.pan += response.drag_delta();
                }
            }

            if response.drag_stopped() {
                self.drag.release(&mut self.charges);
                self.panning = false;
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer = response.hover_pos().unwrap_or(rect.center());
                self.camera.zoom_around(pointer, scroll, rect);
            }

            // Draw charge discs.
            for c in &self.charges.charges {
                let p = self.camera.world_to_screen(c.pos, rect);
                let r = (self.cfg.charge_radius * self.camera.zoom).max(2.0);
                painter.circle_filled(p, r, draw::charge_color(c.polarity()));
            }

            // Net force arrow and magnitude label per charge, recomputed
            // from scratch every frame.
            for id in 0..self.charges.charges.len() {
                let c = self.charges.charges[id];
                let f = force::net_on(id, &self.charges, self.cfg.coulomb_k);

                if f == Vec2::ZERO {
                    continue;
                }

                let tip_world = c.pos + arrow::scaled_to(f, self.cfg.force_arrow_length);
                let start = self.camera.world_to_screen(c.pos, rect);
                let end = self.camera.world_to_screen(tip_world, rect);

                draw::paint_arrow(
                    &painter,
                    start,
                    end,
                    self.cfg.arrow_head_size,
                    draw::charge_color(c.polarity()),
                );
                draw::magnitude_label(&painter, end, f.length(), "N");
            }
        });
    }
}

impl App for ForceViewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_viewer_has_the_fixed_three_charge_layout() {
        let viewer = ForceViewer::new();

        assert_eq!(viewer.charges.charges.len(), 3);

        // One positive, two negative.
        let positives = viewer
            .charges
            .charges
            .iter()
            .filter(|c| c.magnitude > 0.0)
            .count();
        assert_eq!(positives, 1);

        // Nothing is being dragged at startup.
        assert_eq!(viewer.drag.dragged(), None);
        assert!(viewer.charges.charges.iter().all(|c| !c.dragging));
    }

    #[test]
    fn reset_restores_positions_after_a_drag() {
        let mut viewer = ForceViewer::new();
        let initial: Vec<Vec2> = viewer.charges.charges.iter().map(|c| c.pos).collect();

        // Grab the first charge and move it somewhere else.
        viewer
            .drag
            .press(initial[0], &mut viewer.charges, viewer.cfg.charge_radius);
        viewer
            .drag
            .drag_to(Vec2::new(250.0, -90.0), &mut viewer.charges);
        assert_ne!(viewer.charges.charges[0].pos, initial[0]);

        viewer.reset();

        let after: Vec<Vec2> = viewer.charges.charges.iter().map(|c| c.pos).collect();
        assert_eq!(after, initial);
        assert_eq!(viewer.drag.dragged(), None);
    }

    #[test]
    fn every_charge_feels_a_nonzero_net_force_in_the_initial_layout() {
        let viewer = ForceViewer::new();

        for id in 0..viewer.charges.charges.len() {
            let f = force::net_on(id, &viewer.charges, viewer.cfg.coulomb_k);
            assert!(f.length() > 0.0, "charge {id} has no force arrow");
        }
    }
}
