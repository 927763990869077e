//! Interactive electric field viewer built with eframe/egui.
//!
//! This module defines [`FieldViewer`], which owns two draggable source
//! charges and implements [`eframe::App`] to render the net electric field
//! as a grid of arrows covering the visible area. The pointer interaction
//! (drag charges, pan, scroll zoom) matches the force viewer.

use crate::camera::Camera;
use crate::draw;
use charge_core::{
    arrow,
    charge::{Charge, ChargeSet},
    config::Config,
    drag::DragController,
    field::{self, FieldGrid},
};
use eframe::App;
use glam::Vec2;

/// Main application state for the field demo.
///
/// The per-frame update is:
/// 1. Handle pointer input (grab/move/release a charge, pan, zoom).
/// 2. Build a [`FieldGrid`] over the currently visible world rectangle.
/// 3. Evaluate the net field at every lattice point and draw an arrow.
///
/// ### Fields
/// - `charges` - The fixed pair of positive source charges.
/// - `cfg` - Physics and display constants, tweakable from the side panel.
/// - `camera` - World↔screen mapping (zoom and pan).
/// - `drag` - Idle/Dragging state machine over the charge set.
/// - `panning` - Whether the current pointer drag moves the camera.
/// - `hover_world` - Pointer position in world space from the last frame,
///   used to show the sampled field in the status bar.
pub struct FieldViewer {
    charges: ChargeSet,
    cfg: Config,
    camera: Camera,
    drag: DragController,
    panning: bool,
    hover_world: Option<Vec2>,
}

/// The demo's fixed charge layout: two equal positive charges on the
/// horizontal axis (world origin at the window center).
fn initial_charges() -> Vec<Charge> {
    vec![
        Charge::new(Vec2::new(-133.0, 0.0), 1e-3),
        Charge::new(Vec2::new(133.0, 0.0), 1e-3),
    ]
}

impl Default for FieldViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldViewer {
    /// Creates a viewer with the fixed two-charge layout, default
    /// configuration, and an untouched camera.
    pub fn new() -> Self {
        Self {
            charges: ChargeSet::from_charges(initial_charges()),
            cfg: Config::default(),
            camera: Camera::new(),
            drag: DragController::new(),
            panning: false,
            hover_world: None,
        }
    }

    /// Restores the initial charge layout and drops any active drag,
    /// keeping configuration and camera.
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

    /// Builds the bottom status bar (charge count, field at the pointer).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("zoom = {:.2}", self.camera.zoom));
                ui.separator();
                ui.label(format!("charges = {}", self.charges.charges.len()));

                if let Some(p) = self.hover_world {
                    let e = field::at(&self.charges, p, self.cfg.coulomb_k);
                    ui.label(format!("|E| at pointer = {:.2e} N/C", e.length()));
                }
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
                    "grid_step:",
                    &mut self.cfg.grid_step,
                    5.0..=100.0,
                    1.0,
                );
                draw::labeled_drag_f32(
                    ui,
                    "arrow_length:",
                    &mut self.cfg.field_arrow_length,
                    5.0..=100.0,
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
                        -1e-2..=1e-2,
                        1e-4,
                    );
                }

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }
            });
    }

    /// Builds the central panel: charges, field arrows, interaction.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::WHITE);

            self.hover_world = response
                .hover_pos()
                .map(|p| self.camera.screen_to_world(p, rect));

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

            // Field arrows over the visible world rectangle. The lattice
            // is snapped to step multiples, so panning only changes which
            // points are clipped, not where they sit.
            let min = self.camera.screen_to_world(rect.left_bottom(), rect);
            let max = self.camera.screen_to_world(rect.right_top(), rect);
            let grid = FieldGrid::new(min, max, self.cfg.grid_step);

            for p in grid.points() {
                let e = field::at(&self.charges, p, self.cfg.coulomb_k);
                if e == Vec2::ZERO {
                    continue;
                }

                let tip = p + arrow::scaled_to(e, self.cfg.field_arrow_length);
                draw::paint_arrow(
                    &painter,
                    self.camera.world_to_screen(p, rect),
                    self.camera.world_to_screen(tip, rect),
                    self.cfg.arrow_head_size,
                    egui::Color32::BLACK,
                );
            }

            // Draw charge discs on top of the field.
            for c in &self.charges.charges {
                let p = self.camera.world_to_screen(c.pos, rect);
                let r = (self.cfg.charge_radius * self.camera.zoom).max(2.0);
                painter.circle_filled(p, r, draw::charge_color(c.polarity()));
            }
        });
    }
}

impl App for FieldViewer {
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
    fn new_viewer_has_two_positive_charges() {
        let viewer = FieldViewer::new();

        assert_eq!(viewer.charges.charges.len(), 2);
        assert!(viewer.charges.charges.iter().all(|c| c.magnitude > 0.0));
        assert_eq!(viewer.drag.dragged(), None);
    }

    #[test]
    fn field_cancels_at_the_midpoint_of_the_initial_pair() {
        // The two sources are equal and positive, so the midpoint of the
        // connecting line sees equal and opposite contributions.
        let viewer = FieldViewer::new();
        let mid = (viewer.charges.charges[0].pos + viewer.charges.charges[1].pos) / 2.0;

        let e = field::at(&viewer.charges, mid, viewer.cfg.coulomb_k);
        assert!(e.length() < 1e-3, "expected cancellation, got {e:?}");
    }

    #[test]
    fn reset_restores_positions_after_a_drag() {
        let mut viewer = FieldViewer::new();
        let initial: Vec<Vec2> = viewer.charges.charges.iter().map(|c| c.pos).collect();

        viewer
            .drag
            .press(initial[1], &mut viewer.charges, viewer.cfg.charge_radius);
        viewer
            .drag
            .drag_to(Vec2::new(-40.0, 180.0), &mut viewer.charges);
        assert_ne!(viewer.charges.charges[1].pos, initial[1]);

        viewer.reset();

        let after: Vec<Vec2> = viewer.charges.charges.iter().map(|c| c.pos).collect();
        assert_eq!(after, initial);
    }
}
