//! Point and bounded point-sequence types shared by the whole engine.
//!
//! A [`PointSequence`] is used for three different things: the curve the user
//! drew, the Fourier coefficients (interpreted as complex numbers) and the
//! curve traced by the tip of the epicycle chain.

use serde::{Deserialize, Serialize};

/// Hard upper bound on the number of points any sequence may hold.
pub const MAX_POINTS: usize = 10_000;

/// A 2D point. For coefficient sequences `x` is the real part and `y` the
/// imaginary part.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the point seen as a vector from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Point) -> f64 {
        Point::new(other.x - self.x, other.y - self.y).norm()
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Ordered container of points with a fixed capacity.
///
/// Insertions past the capacity are refused rather than reallocating, so the
/// sequence never grows beyond `capacity() <= MAX_POINTS`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSequence {
    points: Vec<Point>,
    capacity: usize,
}

impl Default for PointSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSequence {
    /// Empty sequence bounded by [`MAX_POINTS`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_POINTS)
    }

    /// Empty sequence bounded by `capacity`, clamped to [`MAX_POINTS`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_POINTS);
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a sequence from an iterator, silently dropping whatever does not
    /// fit into [`MAX_POINTS`].
    pub fn from_points<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut seq = Self::new();
        for p in iter {
            if !seq.push(p) {
                break;
            }
        }
        seq
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.points.len()
    }

    /// Append a point. Returns `false` (and leaves the sequence untouched)
    /// when the sequence is already full.
    pub fn push(&mut self, p: Point) -> bool {
        if self.is_full() {
            return false;
        }
        self.points.push(p);
        true
    }

    /// Overwrite the point at `index`, which must be below `len()`.
    pub fn set(&mut self, index: usize, p: Point) {
        self.points[index] = p;
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Shorten the sequence to `len` points; no-op if already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.points.truncate(len);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consecutive pairs `(p[i-1], p[i])`, i.e. the segments of the polyline.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

impl std::ops::Index<usize> for PointSequence {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
