//! Standalone sketch application that implements [`eframe::App`].
//!
//! The session draws into an offscreen [`ImageCanvas`] once per animation
//! tick; the image is uploaded as a texture and shown in the central panel.
//! egui may repaint more often than the tick interval (pointer motion, window
//! events), in which case the last texture is simply shown again so the
//! animation speed does not depend on input activity.

use std::time::{Duration, Instant};

use eframe::egui;
use egui_phosphor::regular::{ARROW_DOWN, ARROW_UP, BROOM, CHART_BAR};

use crate::canvas::{CanvasSize, ImageCanvas};
use crate::config::SketchConfig;
use crate::data::points::Point;
use crate::session::{FrameInput, SketchSession};

#[cfg(feature = "spectrum")]
use super::spectrum_panel::SpectrumPanel;

pub struct SketchApp {
    pub session: SketchSession,
    pub config: SketchConfig,
    /// Open the spectrum panel below the canvas.
    pub show_spectrum: bool,
    #[cfg(feature = "spectrum")]
    spectrum: SpectrumPanel,
    canvas: Option<ImageCanvas>,
    texture: Option<egui::TextureHandle>,
    last_tick: Option<Instant>,
    /// Term changes requested from the toolbar, applied on the next tick.
    pending: FrameInput,
}

impl SketchApp {
    pub fn new(config: SketchConfig, session: SketchSession) -> Self {
        Self {
            show_spectrum: config.show_spectrum,
            #[cfg(feature = "spectrum")]
            spectrum: SpectrumPanel::default(),
            session,
            config,
            canvas: None,
            texture: None,
            last_tick: None,
            pending: FrameInput::default(),
        }
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.config.frame_interval_ms.max(1))
    }

    fn tick_due(&self, now: Instant) -> bool {
        match self.last_tick {
            None => true,
            Some(t) => now.duration_since(t) >= self.frame_interval(),
        }
    }

    /// Make sure the offscreen canvas matches the panel size in physical pixels.
    fn ensure_canvas(&mut self, width: u32, height: u32) {
        let stale = self
            .canvas
            .as_ref()
            .map_or(true, |c| c.image.width() != width || c.image.height() != height);
        if stale {
            self.canvas = Some(ImageCanvas::new(width, height, self.config.palette.background));
            self.session
                .set_canvas_size(CanvasSize::new(width as f64, height as f64));
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(&self.config.title);
            ui.separator();
            let n = self.session.coefficients().len();
            ui.label(format!("Terms: {}/{}", self.session.active_terms(), n));
            ui.label(format!("Vectors: {}", self.session.drop_plan().vector_count()));
            ui.separator();
            if ui
                .button(format!("{ARROW_UP} More"))
                .on_hover_text("Add a frequency term [Up]")
                .clicked()
            {
                self.pending.more_terms = true;
            }
            if ui
                .button(format!("{ARROW_DOWN} Fewer"))
                .on_hover_text("Remove a frequency term [Down]")
                .clicked()
            {
                self.pending.fewer_terms = true;
            }
            if ui
                .button(format!("{BROOM} Clear"))
                .on_hover_text("Discard the drawing")
                .clicked()
            {
                self.session.clear();
            }
            if cfg!(feature = "spectrum")
                && ui
                    .selectable_label(self.show_spectrum, format!("{CHART_BAR} Spectrum"))
                    .on_hover_text("Show coefficient magnitudes [S]")
                    .clicked()
            {
                self.show_spectrum = !self.show_spectrum;
            }
        });
        ui.label(
            "Draw a closed curve with the left mouse button. \
             Up/Down change the number of terms, Enter or Esc quits.",
        );
    }
}

/// Canvas pixel under the pointer while the primary button is held, or `None`.
fn stroke_point(
    primary_held: bool,
    pos: Option<egui::Pos2>,
    origin: egui::Pos2,
    ppp: f32,
) -> Option<Point> {
    if !primary_held {
        return None;
    }
    pos.map(|pos| {
        let local = pos - origin;
        Point::new((local.x * ppp) as f64, (local.y * ppp) as f64)
    })
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (quit, toggle_spectrum, key_more, key_fewer) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::S),
                i.key_down(egui::Key::ArrowUp),
                i.key_down(egui::Key::ArrowDown),
            )
        });
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if toggle_spectrum && cfg!(feature = "spectrum") {
            self.show_spectrum = !self.show_spectrum;
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.top_bar(ui));

        #[cfg(feature = "spectrum")]
        if self.show_spectrum {
            egui::TopBottomPanel::bottom("spectrum_panel")
                .resizable(true)
                .min_height(120.0)
                .default_height(220.0)
                .show(ctx, |ui| self.spectrum.show(ui, &self.session));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let response = ui.allocate_rect(rect, egui::Sense::drag());
                let ppp = ctx.pixels_per_point();
                let width = (rect.width() * ppp).round().max(1.0) as u32;
                let height = (rect.height() * ppp).round().max(1.0) as u32;
                self.ensure_canvas(width, height);

                let now = Instant::now();
                if self.tick_due(now) {
                    let primary_held = response.is_pointer_button_down_on()
                        && ctx.input(|i| i.pointer.primary_down());
                    let pos = response
                        .interact_pointer_pos()
                        .or_else(|| ctx.input(|i| i.pointer.latest_pos()));
                    let pointer = stroke_point(primary_held, pos, rect.min, ppp);
                    let input = FrameInput {
                        pointer,
                        more_terms: key_more || self.pending.more_terms,
                        fewer_terms: key_fewer || self.pending.fewer_terms,
                    };
                    self.pending = FrameInput::default();

                    if let Some(canvas) = self.canvas.as_mut() {
                        canvas.fill(self.config.palette.background);
                        self.session.step(input, canvas);
                        let image = egui::ColorImage::from_rgba_unmultiplied(
                            [canvas.image.width() as usize, canvas.image.height() as usize],
                            canvas.image.as_raw(),
                        );
                        match self.texture.as_mut() {
                            Some(tex) => tex.set(image, egui::TextureOptions::NEAREST),
                            None => {
                                self.texture = Some(ctx.load_texture(
                                    "sketch_canvas",
                                    image,
                                    egui::TextureOptions::NEAREST,
                                ))
                            }
                        }
                    }
                    self.last_tick = Some(now);
                }

                if let Some(tex) = &self.texture {
                    ui.painter().image(
                        tex.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
            });

        ctx.request_repaint_after(self.frame_interval());
    }
}
