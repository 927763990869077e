//! Application entry point for the electric field demo.
//!
//! This binary sets up eframe/egui and delegates all interactive logic
//! and rendering to [`FieldViewer`].

use charge_view::field_viewer::FieldViewer;

/// Starts the native eframe application.
///
/// The window is sized 800×600 like the classic demo. All UI state and
/// rendering are handled by [`FieldViewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Electric Field Simulation",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(FieldViewer::new()))
        }),
    )
}
