//! Interactive sketch state: stroke capture, re-transform on release, term
//! selection and per-tick animation.
//!
//! [`SketchSession`] is independent of any windowing toolkit. The host feeds
//! it one [`FrameInput`] per tick and hands it a [`LineCanvas`] to draw on.

use crate::canvas::{CanvasSize, LineCanvas};
use crate::config::{SessionSettings, SketchConfig, SketchPalette};
use crate::data::dft::transform;
use crate::data::drop_plan::DropPlan;
use crate::data::epicycles::{EpicycleRenderer, TraceBuffer};
use crate::data::frequencies::{assign_frequencies, FrequencySequence};
use crate::data::gibbs::compensate_closure;
use crate::data::points::{Point, PointSequence};

/// Input sampled by the host for a single tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position while the drawing button is held.
    pub pointer: Option<Point>,
    /// Request to show one more frequency term.
    pub more_terms: bool,
    /// Request to show one fewer frequency term.
    pub fewer_terms: bool,
}

/// What happened during a [`SketchSession::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// A gesture ended and the curve was transformed.
    pub transformed: bool,
    /// A frame of the epicycle animation was rendered.
    pub animated: bool,
}

pub struct SketchSession {
    settings: SessionSettings,
    canvas: CanvasSize,
    palette: SketchPalette,
    curve: PointSequence,
    coefficients: PointSequence,
    frequencies: FrequencySequence,
    renderer: EpicycleRenderer,
    frame_count: u64,
    drop_count: i64,
    drawing: bool,
    cooldown: u32,
}

impl SketchSession {
    pub fn new(settings: SessionSettings, canvas: CanvasSize, palette: SketchPalette) -> Self {
        Self {
            renderer: EpicycleRenderer::new(palette.chain),
            settings,
            canvas,
            palette,
            curve: PointSequence::new(),
            coefficients: PointSequence::new(),
            frequencies: Vec::new(),
            frame_count: 0,
            drop_count: 0,
            drawing: false,
            cooldown: 0,
        }
    }

    pub fn from_config(cfg: &SketchConfig) -> Self {
        Self::new(cfg.session.clone(), cfg.canvas, cfg.palette.clone())
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn curve(&self) -> &PointSequence {
        &self.curve
    }

    pub fn coefficients(&self) -> &PointSequence {
        &self.coefficients
    }

    pub fn frequencies(&self) -> &[i64] {
        &self.frequencies
    }

    pub fn trace(&self) -> &TraceBuffer {
        &self.renderer.trace
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn drop_count(&self) -> i64 {
        self.drop_count
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Number of terms left after dropping, `n - drop_count` floored at zero.
    pub fn active_terms(&self) -> usize {
        let n = self.coefficients.len() as i64;
        (n - self.drop_count).max(0) as usize
    }

    /// Which bins the next frame will use.
    pub fn drop_plan(&self) -> DropPlan {
        DropPlan::new(self.coefficients.len(), self.drop_count)
    }

    pub fn set_canvas_size(&mut self, size: CanvasSize) {
        self.canvas = size;
    }

    pub fn set_palette(&mut self, palette: SketchPalette) {
        self.renderer.colors = palette.chain;
        self.palette = palette;
    }

    // ── Curve lifecycle ──────────────────────────────────────────────────────

    /// Replace the curve with `points` and transform it right away, without
    /// closing-gap compensation.
    pub fn seed<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        self.clear();
        self.curve = PointSequence::from_points(points);
        if self.curve.is_empty() {
            return;
        }
        self.coefficients = transform(&self.curve);
        self.frequencies = assign_frequencies(self.coefficients.len());
        self.restart_animation();
    }

    /// Pointer held at `p`. The first call of a gesture discards the previous
    /// curve and resets term selection. Returns whether `p` was recorded.
    pub fn pointer_down(&mut self, p: Point) -> bool {
        if !self.drawing {
            self.drop_count = 0;
            self.cooldown = 0;
            self.curve.clear();
            self.drawing = true;
        }
        self.renderer.trace.clear();
        if self.curve.len() < self.settings.stroke_limit {
            self.curve.push(p)
        } else {
            false
        }
    }

    /// Pointer released. Ends the gesture and transforms the curve. Returns
    /// whether a transform happened.
    pub fn pointer_up(&mut self) -> bool {
        if !self.drawing {
            return false;
        }
        self.drawing = false;
        if self.curve.is_empty() {
            return false;
        }
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        let before = self.curve.len();
        let added = if self.settings.compensate_closure {
            compensate_closure(&mut self.curve, self.canvas, &self.settings.gibbs)
        } else {
            0
        };
        self.coefficients = transform(&self.curve);
        self.frequencies = assign_frequencies(self.coefficients.len());
        self.curve.truncate(before);
        log::debug!(
            "transformed {} points ({} added to close the curve)",
            self.coefficients.len(),
            added
        );
        self.restart_animation();
    }

    fn restart_animation(&mut self) {
        self.frame_count = 0;
        self.renderer.reset(self.coefficients.len());
    }

    /// Discard the curve, its transform and the trace.
    pub fn clear(&mut self) {
        self.curve.clear();
        self.coefficients.clear();
        self.frequencies.clear();
        self.renderer.reset(0);
        self.frame_count = 0;
        self.drop_count = 0;
        self.cooldown = 0;
        self.drawing = false;
    }

    // ── Term selection ───────────────────────────────────────────────────────

    fn arm_cooldown(&mut self) {
        let remaining = self.coefficients.len() as i64 - self.drop_count;
        self.cooldown = if remaining > self.settings.cooldown_term_threshold as i64 {
            0
        } else {
            self.settings.drop_cooldown_ticks
        };
    }

    fn apply_more_terms(&mut self) {
        self.arm_cooldown();
        self.renderer.trace.clear();
        if self.drop_count > 0 {
            self.drop_count -= 1;
        }
    }

    fn apply_fewer_terms(&mut self) {
        self.arm_cooldown();
        self.renderer.trace.clear();
        self.drop_count += 1;
    }

    /// Add back one dropped term. Returns `false` while the cooldown runs.
    pub fn more_terms(&mut self) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        self.apply_more_terms();
        true
    }

    /// Drop one more term. Returns `false` while the cooldown runs.
    pub fn fewer_terms(&mut self) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        self.apply_fewer_terms();
        true
    }

    // ── Per-tick driving ─────────────────────────────────────────────────────

    /// Advance the session by one tick: apply term keys, track the pointer,
    /// transform on release, then draw either the stroke in progress or one
    /// animation frame.
    pub fn step<C: LineCanvas>(&mut self, input: FrameInput, canvas: &mut C) -> StepOutcome {
        if self.cooldown == 0 {
            // Both keys are checked against the same cooldown.
            if input.more_terms {
                self.apply_more_terms();
            }
            if input.fewer_terms {
                self.apply_fewer_terms();
            }
        }
        self.cooldown = self.cooldown.saturating_sub(1);

        let mut outcome = StepOutcome::default();
        match input.pointer {
            Some(p) => {
                self.pointer_down(p);
            }
            None => outcome.transformed = self.pointer_up(),
        }
        outcome.animated = self.tick(canvas);
        outcome
    }

    /// Draw the current state: the stroke while drawing, otherwise one frame
    /// of the chain, the faded original curve and the trace. Advances the
    /// frame counter when a frame was rendered.
    pub fn tick<C: LineCanvas>(&mut self, canvas: &mut C) -> bool {
        if self.drawing {
            canvas.set_color(self.palette.stroke);
            canvas.draw_polyline(self.curve.iter().map(|p| (p.x, p.y)));
            return false;
        }
        if self.coefficients.is_empty() {
            return false;
        }
        self.renderer.render_frame(
            &self.coefficients,
            &self.frequencies,
            self.frame_count,
            self.drop_count,
            canvas,
        );
        canvas.set_color(self.palette.faded_curve);
        canvas.draw_polyline(self.curve.iter().map(|p| (p.x, p.y)));
        canvas.set_color(self.palette.trace);
        canvas.draw_polyline(self.renderer.trace.iter_chronological().map(|p| (p.x, p.y)));
        self.frame_count += 1;
        true
    }
}
