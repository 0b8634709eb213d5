//! Epicycle chain evaluation and the trace it leaves behind.
//!
//! Every frame the chain is rebuilt from scratch: it starts at the DC
//! coefficient and adds one rotating vector per active frequency bin. The tip
//! of the chain is appended to a [`TraceBuffer`], a ring buffer that keeps the
//! most recent `SUBSTEPS * n` tips so the reconstructed curve stays visible
//! without growing without bound.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::canvas::{LineCanvas, Rgba, Segment};

use super::circle::draw_circle;
use super::drop_plan::DropPlan;
use super::points::{Point, PointSequence};

/// Animation frames per base cycle and per coefficient. One full turn of the
/// fundamental takes `SUBSTEPS * n` frames.
pub const SUBSTEPS: usize = 4;

/// Rotate the amplitude `a` by `theta`:
/// `(ax cos + ay sin, ay cos - ax sin)`.
pub fn rotate(a: Point, theta: f64) -> Point {
    let (s, c) = theta.sin_cos();
    Point::new(a.x * c + a.y * s, a.y * c - a.x * s)
}

/// One rotating vector of the chain as evaluated for a single frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainLink {
    /// Bin index the vector belongs to.
    pub index: usize,
    /// Tail of the vector, also the center of its orbit circle.
    pub origin: Point,
    /// Tip of the vector, origin of the next link.
    pub tip: Point,
    /// Orbit radius, the magnitude of the coefficient.
    pub radius: f64,
}

/// Evaluate the chain for `frame_index` without drawing anything.
///
/// Returns the links in visiting order and the final tip. With an empty
/// coefficient list the result is `(vec![], None)`.
pub fn evaluate_chain(
    coeffs: &PointSequence,
    freqs: &[i64],
    frame_index: u64,
    drop_count: i64,
) -> (Vec<ChainLink>, Option<Point>) {
    let n = coeffs.len();
    let Some(mut origin) = coeffs.first() else {
        return (Vec::new(), None);
    };
    let base_angle = 2.0 * PI / (n * SUBSTEPS) as f64;
    let plan = DropPlan::new(n, drop_count);
    let indices = plan.indices();
    let mut links = Vec::with_capacity(indices.len());
    for index in indices {
        let a = coeffs[index];
        let f = freqs.get(index).copied().unwrap_or(0);
        let r = rotate(a, base_angle * f as f64 * frame_index as f64);
        let tip = Point::new(origin.x + r.x, origin.y + r.y);
        links.push(ChainLink {
            index,
            origin,
            tip,
            radius: a.norm(),
        });
        origin = tip;
    }
    (links, Some(origin))
}

// ─────────────────────────────────────────────────────────────────────────────
// TraceBuffer
// ─────────────────────────────────────────────────────────────────────────────

/// Ring buffer of chain tips.
///
/// `count` grows monotonically; the storage slot written next is always
/// `count % capacity`.
#[derive(Clone, Debug, Default)]
pub struct TraceBuffer {
    points: Vec<Point>,
    capacity: usize,
    count: u64,
}

impl TraceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
            count: 0,
        }
    }

    /// Trace sized for a transform with `n` bins.
    pub fn for_terms(n: usize) -> Self {
        Self::new(n * SUBSTEPS)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of points ever pushed since the last clear.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Number of points currently stored.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Storage slot the next [`push`](Self::push) writes to.
    pub fn write_index(&self) -> usize {
        if self.capacity == 0 {
            0
        } else {
            (self.count % self.capacity as u64) as usize
        }
    }

    /// Store `p`, overwriting the oldest point once full. Returns the slot
    /// written, or `None` for a zero-capacity buffer.
    pub fn push(&mut self, p: Point) -> Option<usize> {
        if self.capacity == 0 {
            return None;
        }
        let idx = self.write_index();
        if idx < self.points.len() {
            self.points[idx] = p;
        } else {
            self.points.push(p);
        }
        self.count += 1;
        Some(idx)
    }

    /// Point stored in slot `index` (storage order, not age order).
    pub fn slot(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Stored points from oldest to newest.
    pub fn iter_chronological(&self) -> impl Iterator<Item = Point> + '_ {
        let split = if self.points.len() < self.capacity {
            0
        } else {
            self.write_index()
        };
        self.points[split..]
            .iter()
            .chain(self.points[..split].iter())
            .copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.count = 0;
    }

    /// Clear and change the capacity.
    pub fn reset(&mut self, capacity: usize) {
        self.clear();
        self.capacity = capacity;
        self.points.reserve(capacity);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EpicycleRenderer
// ─────────────────────────────────────────────────────────────────────────────

/// Colors used while drawing the chain.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainColors {
    pub vector: Rgba,
    pub orbit: Rgba,
}

impl Default for ChainColors {
    fn default() -> Self {
        Self {
            vector: Rgba::WHITE,
            orbit: Rgba::ORANGE,
        }
    }
}

/// Draws the epicycle chain frame by frame and owns the resulting trace.
#[derive(Clone, Debug, Default)]
pub struct EpicycleRenderer {
    pub trace: TraceBuffer,
    pub colors: ChainColors,
}

impl EpicycleRenderer {
    pub fn new(colors: ChainColors) -> Self {
        Self {
            trace: TraceBuffer::default(),
            colors,
        }
    }

    /// Forget the trace and size it for `n` bins.
    pub fn reset(&mut self, n: usize) {
        self.trace.reset(n * SUBSTEPS);
    }

    /// Evaluate the chain for `frame_index`, draw every vector and its orbit
    /// circle onto `canvas`, and append the chain tip to the trace.
    ///
    /// Returns the tip, or `None` if there are no coefficients.
    pub fn render_frame<C: LineCanvas + ?Sized>(
        &mut self,
        coeffs: &PointSequence,
        freqs: &[i64],
        frame_index: u64,
        drop_count: i64,
        canvas: &mut C,
    ) -> Option<Point> {
        let (links, tip) = evaluate_chain(coeffs, freqs, frame_index, drop_count);
        let tip = tip?;
        for link in &links {
            canvas.set_color(self.colors.vector);
            canvas.draw_segment(Segment::from_real(
                link.origin.x,
                link.origin.y,
                link.tip.x,
                link.tip.y,
            ));
            canvas.set_color(self.colors.orbit);
            draw_circle(canvas, link.origin, link.radius);
        }
        let wanted = coeffs.len() * SUBSTEPS;
        if self.trace.capacity() != wanted {
            self.trace.reset(wanted);
        }
        self.trace.push(tip);
        Some(tip)
    }
}
