//! Line-drawing surfaces the engine renders onto.
//!
//! The engine only ever needs two primitives from its host: "set the current
//! color" and "draw a line between two integer pixels". [`LineCanvas`] is that
//! seam. The egui window implements it on top of a `Painter`; this module
//! provides an offscreen [`ImageCanvas`] and a [`RecordingCanvas`] that keeps
//! every call for inspection.

use image::{Rgba as ImageRgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    pub const ORANGE: Rgba = Rgba([255, 165, 0, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    pub fn a(&self) -> u8 {
        self.0[3]
    }
}

impl From<Rgba> for egui::Color32 {
    fn from(c: Rgba) -> Self {
        egui::Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), c.a())
    }
}

impl From<Rgba> for ImageRgba<u8> {
    fn from(c: Rgba) -> Self {
        ImageRgba(c.0)
    }
}

/// Size of the drawing area in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }
}

/// A line segment between two integer pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Segment {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Segment between two real-valued points, truncating each coordinate
    /// toward zero.
    pub fn from_real(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(to_pixel(x0), to_pixel(y0), to_pixel(x1), to_pixel(y1))
    }
}

/// Truncate a real coordinate to a pixel coordinate. Saturates on overflow
/// and maps NaN to 0.
pub fn to_pixel(v: f64) -> i32 {
    v as i32
}

/// Host drawing primitive consumed by the renderer and the circle rasterizer.
///
/// Implementations must accept coordinates far outside the visible area.
pub trait LineCanvas {
    /// Color used by subsequent [`draw_line`](Self::draw_line) calls.
    fn set_color(&mut self, color: Rgba);

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    fn draw_segment(&mut self, s: Segment) {
        self.draw_line(s.x0, s.y0, s.x1, s.y1);
    }

    /// Draw consecutive points as a connected polyline.
    fn draw_polyline<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = (f64, f64)>,
        Self: Sized,
    {
        let mut prev: Option<(f64, f64)> = None;
        for p in points {
            if let Some(q) = prev {
                self.draw_segment(Segment::from_real(q.0, q.1, p.0, p.1));
            }
            prev = Some(p);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RecordingCanvas
// ─────────────────────────────────────────────────────────────────────────────

/// Canvas that stores every segment together with the color it was drawn in.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub color: Option<Rgba>,
    pub lines: Vec<(Rgba, Segment)>,
    pub color_changes: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.lines.iter().map(|(_, s)| *s)
    }

    /// Number of lines drawn with the given color.
    pub fn count_with(&self, color: Rgba) -> usize {
        self.lines.iter().filter(|(c, _)| *c == color).count()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.color_changes = 0;
    }
}

impl LineCanvas for RecordingCanvas {
    fn set_color(&mut self, color: Rgba) {
        self.color = Some(color);
        self.color_changes += 1;
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let color = self.color.unwrap_or(Rgba::WHITE);
        self.lines.push((color, Segment::new(x0, y0, x1, y1)));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ImageCanvas
// ─────────────────────────────────────────────────────────────────────────────

/// Offscreen canvas backed by an RGBA image, drawing with Bresenham lines.
pub struct ImageCanvas {
    pub image: RgbaImage,
    color: ImageRgba<u8>,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background.into()),
            color: Rgba::WHITE.into(),
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        let px: ImageRgba<u8> = color.into();
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.image.width() as f64, self.image.height() as f64)
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl LineCanvas for ImageCanvas {
    fn set_color(&mut self, color: Rgba) {
        self.color = color.into();
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let w = self.image.width() as f64;
        let h = self.image.height() as f64;
        let Some((x0, y0, x1, y1)) = clip_line(
            (x0 as f64, y0 as f64),
            (x1 as f64, y1 as f64),
            (w - 1.0).max(0.0),
            (h - 1.0).max(0.0),
        ) else {
            return;
        };
        draw_line(
            &mut self.image,
            x0.round() as i32,
            y0.round() as i32,
            x1.round() as i32,
            y1.round() as i32,
            self.color,
        );
    }
}

/// Liang–Barsky clip of a segment against `[0, max_x] x [0, max_y]`.
fn clip_line(
    p0: (f64, f64),
    p1: (f64, f64),
    max_x: f64,
    max_y: f64,
) -> Option<(f64, f64, f64, f64)> {
    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-dx, p0.0),
        (dx, max_x - p0.0),
        (-dy, p0.1),
        (dy, max_y - p0.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((
        p0.0 + t0 * dx,
        p0.1 + t0 * dy,
        p0.0 + t1 * dx,
        p0.1 + t1 * dy,
    ))
}

/// Bresenham line into an image; pixels outside the image are skipped.
pub fn draw_line(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: ImageRgba<u8>) {
    let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }
    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let mut err = dx / 2;
    let ystep = if y0 < y1 { 1 } else { -1 };
    let mut y = y0;
    for x in x0..=x1 {
        let (px, py) = if steep { (y, x) } else { (x, y) };
        if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
            img.put_pixel(px as u32, py as u32, color);
        }
        err -= dy;
        if err < 0 {
            y += ystep;
            err += dx;
        }
    }
}
