//! Application entry point for the county population-change viewer.
//!
//! This binary sets up logging and eframe/egui, then delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer` module.

mod logging;
mod state;
mod viewer;

use pop_core::config::ViewerConfig;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// The window title and size come from [`ViewerConfig::default`]. The
/// workbook is loaded once while the viewer is constructed; a failed load
/// is shown inside the window rather than ending the process.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    logging::init();

    let cfg = ViewerConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(cfg.window_size),
        ..Default::default()
    };
    let title = cfg.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg)))),
    )
}
