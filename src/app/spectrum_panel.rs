//! Spectrum panel: coefficient magnitudes plotted against frequency.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::data::spectrum::{spectrum, to_db};
use crate::session::SketchSession;

/// Coefficient magnitude per frequency, with the bins currently animated
/// highlighted.
#[derive(Debug, Clone, Default)]
pub struct SpectrumPanel {
    pub db: bool,
    pub fit_view: bool,
}

impl SpectrumPanel {
    pub fn show(&mut self, ui: &mut egui::Ui, session: &SketchSession) {
        ui.horizontal(|ui| {
            if ui
                .button(if self.db { "Linear" } else { "dB" })
                .on_hover_text("Toggle magnitude scale")
                .clicked()
            {
                self.db = !self.db;
            }
            if ui.button("Fit into view").on_hover_text("Auto scale axes").clicked() {
                self.fit_view = true;
            }
        });

        let bins = spectrum(
            session.coefficients(),
            session.frequencies(),
            &session.drop_plan(),
        );
        if bins.is_empty() {
            ui.label("Spectrum: draw a curve first");
            return;
        }
        let scale = |m: f64| if self.db { to_db(m) } else { m };

        let mut plot = Plot::new("spectrum_plot")
            .legend(Legend::default())
            .allow_zoom(true)
            .allow_scroll(false)
            .allow_boxed_zoom(true)
            .y_axis_label(if self.db { "Magnitude (dB)" } else { "Magnitude" })
            .x_axis_label("Frequency");
        if self.fit_view {
            let (min_x, max_x) = (bins[0].frequency as f64, bins[bins.len() - 1].frequency as f64);
            let (min_y, max_y) = bins.iter().map(|b| scale(b.magnitude)).fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), y| (lo.min(y), hi.max(y)),
            );
            plot = plot.include_x(min_x).include_x(max_x);
            if min_y.is_finite() {
                plot = plot.include_y(min_y).include_y(max_y);
            }
            self.fit_view = false;
        }

        let all: PlotPoints = bins
            .iter()
            .map(|b| [b.frequency as f64, scale(b.magnitude)])
            .collect();
        let active: Vec<[f64; 2]> = bins
            .iter()
            .filter(|b| b.active)
            .map(|b| [b.frequency as f64, scale(b.magnitude)])
            .collect();
        let _ = plot.show(ui, |plot_ui| {
            plot_ui.line(Line::new("magnitude", all));
            plot_ui.points(
                Points::new("active", active)
                    .radius(3.0)
                    .color(egui::Color32::from_rgb(255, 165, 0)),
            );
        });
    }
}
