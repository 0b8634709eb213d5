//! Orbit circle rasterization on top of a [`LineCanvas`].
//!
//! The circle is built one quadrant at a time from an incremental recurrence
//! and mirrored into the other three quadrants, so every step produces four
//! line segments.

use crate::canvas::{LineCanvas, Segment};

use super::points::Point;

/// Mirror the quadrant segment `next -> prev` (both relative to `center`)
/// into all four sign combinations of the axes.
pub fn reflect_four(center: Point, prev: Point, next: Point) -> [Segment; 4] {
    let seg = |sx: f64, sy: f64| {
        Segment::from_real(
            sx * next.x + center.x,
            sy * next.y + center.y,
            sx * prev.x + center.x,
            sy * prev.y + center.y,
        )
    };
    [seg(1.0, 1.0), seg(-1.0, 1.0), seg(-1.0, -1.0), seg(1.0, -1.0)]
}

/// Quadrant vertices of a circle of `radius`, starting at `(radius, 0)` and
/// ending at `(0, radius)`, produced lazily.
///
/// Each step sets `y = i` and `x = sqrt(prev.x^2 - 2 prev.y - 1)`. Values are
/// produced exactly as the recurrence gives them, including NaN once the
/// radicand turns negative. Yields nothing for `radius <= 0`.
pub fn quadrant_vertices(radius: f64) -> QuadrantVertices {
    QuadrantVertices::new(radius)
}

/// Iterator over the recurrence vertices of one circle quadrant.
#[derive(Clone, Debug)]
pub struct QuadrantVertices {
    radius: f64,
    prev: Point,
    steps: i32,
    /// Next step index; `-1` before the starting vertex is yielded.
    step: i32,
    done: bool,
}

impl QuadrantVertices {
    fn new(radius: f64) -> Self {
        Self {
            radius,
            prev: Point::new(radius, 0.0),
            steps: (radius as i32).max(0),
            step: -1,
            done: !(radius > 0.0),
        }
    }
}

impl Iterator for QuadrantVertices {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        if self.step < 0 {
            self.step = 0;
            return Some(self.prev);
        }
        if self.step < self.steps {
            let y = self.step as f64;
            let x = (self.prev.x * self.prev.x - 2.0 * self.prev.y - 1.0).sqrt();
            self.prev = Point::new(x, y);
            self.step += 1;
            return Some(self.prev);
        }
        self.done = true;
        Some(Point::new(0.0, self.radius))
    }
}

/// Draw the orbit circle of `radius` around `center`.
pub fn draw_circle<C: LineCanvas + ?Sized>(canvas: &mut C, center: Point, radius: f64) {
    let mut vertices = quadrant_vertices(radius);
    let Some(mut prev) = vertices.next() else {
        return;
    };
    for next in vertices {
        for s in reflect_four(center, prev, next) {
            canvas.draw_segment(s);
        }
        prev = next;
    }
}
