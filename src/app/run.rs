//! Top-level entry point for running the sketch as a native window.

use eframe::egui;

use crate::config::SketchConfig;
use crate::session::SketchSession;

use super::sketch_app::SketchApp;

/// Height reserved for the toolbar on top of the drawing area.
const TOP_BAR_HEIGHT: f32 = 56.0;

/// Open a native window hosting `session` and block until it is closed.
///
/// The initial inner size leaves `cfg.canvas` for drawing below the toolbar.
pub fn run_sketch(cfg: SketchConfig, session: SketchSession) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = eframe::NativeOptions::default();
    opts.viewport = egui::ViewportBuilder::default()
        .with_title(&title)
        .with_inner_size(egui::vec2(
            cfg.canvas.width as f32,
            cfg.canvas.height as f32 + TOP_BAR_HEIGHT,
        ))
        .with_resizable(true);

    log::info!(
        "opening {}x{} sketch window",
        cfg.canvas.width,
        cfg.canvas.height
    );
    let app = SketchApp::new(cfg, session);
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
