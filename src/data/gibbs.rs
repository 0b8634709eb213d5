//! Closing-gap compensation to reduce ringing where the curve wraps around.
//!
//! The transform treats the curve as periodic, so a large jump between the
//! last and first sample shows up as a discontinuity and the reconstruction
//! rings around it. Filling the gap with evenly spaced points before the
//! transform smooths that seam. The added points are only meant for the
//! transform: callers truncate the curve back afterwards.

use serde::{Deserialize, Serialize};

use crate::canvas::CanvasSize;

use super::points::{Point, PointSequence};

/// Tuning knobs for [`compensate_closure`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GibbsSettings {
    /// The gap must exceed `canvas diagonal / gap_divisor` to be filled.
    pub gap_divisor: f64,
    /// Approximate distance between inserted points, in pixels.
    pub spacing: f64,
}

impl Default for GibbsSettings {
    fn default() -> Self {
        Self {
            gap_divisor: 10.0,
            spacing: 30.0,
        }
    }
}

/// Append interpolated points between the last and the first point of
/// `curve` when the two are far apart.
///
/// Returns how many points were appended. That is zero when the gap is below
/// the threshold, when the gap is shorter than one `spacing`, or when the
/// curve is empty. Fewer than requested are appended if the curve fills up.
pub fn compensate_closure(
    curve: &mut PointSequence,
    canvas: CanvasSize,
    settings: &GibbsSettings,
) -> usize {
    let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
        return 0;
    };
    let before = curve.len();
    let dx = first.x - last.x;
    let dy = first.y - last.y;
    let gap = (dx * dx + dy * dy).sqrt();
    if gap <= canvas.diagonal() / settings.gap_divisor {
        return 0;
    }
    let m = (gap / settings.spacing).floor() as usize;
    for i in 1..=m {
        let t = i as f64;
        let p = Point::new((t * dx) / m as f64 + last.x, (t * dy) / m as f64 + last.y);
        if !curve.push(p) {
            break;
        }
    }
    curve.len() - before
}
