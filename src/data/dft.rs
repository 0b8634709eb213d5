//! Naive O(n^2) discrete Fourier transform of a drawn curve.

use std::f64::consts::PI;

use super::points::{Point, PointSequence};

/// Compute the Fourier coefficients of `curve`, treating each point as the
/// complex number `x + iy`.
///
/// Uses the inverse-transform sign convention with `1/n` normalisation:
///
/// ```text
/// c[i] = (1/n) * sum_j z[j] * exp(+2*pi*i*i*j/n)
/// ```
///
/// so that summing `c[i] * exp(-2*pi*i*f[i]*k/n)` over all bins gives back
/// `z[k]`. An empty curve yields an empty result.
pub fn transform(curve: &PointSequence) -> PointSequence {
    let n = curve.len();
    let mut out = PointSequence::with_capacity(n);
    if n == 0 {
        return out;
    }
    let angle = 2.0 * PI / n as f64;
    let scale = 1.0 / n as f64;
    for i in 0..n {
        let (mut re, mut im) = (0.0, 0.0);
        for (j, p) in curve.iter().enumerate() {
            let (s, c) = (angle * i as f64 * j as f64).sin_cos();
            re += p.x * c - p.y * s;
            im += p.y * c + p.x * s;
        }
        out.push(Point::new(re * scale, im * scale));
    }
    out
}
