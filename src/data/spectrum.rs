//! Amplitude spectrum of the current transform, for display.

use super::drop_plan::DropPlan;
use super::points::PointSequence;

/// One frequency bin as shown in the spectrum view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpectrumBin {
    pub index: usize,
    pub frequency: i64,
    /// Orbit radius of the bin, `|c|`.
    pub magnitude: f64,
    /// Whether the bin takes part in the animation under the current plan.
    /// The DC bin always does.
    pub active: bool,
}

/// Bins sorted by signed frequency, tagged with whether `plan` uses them.
pub fn spectrum(coeffs: &PointSequence, freqs: &[i64], plan: &DropPlan) -> Vec<SpectrumBin> {
    let mut active = vec![false; coeffs.len()];
    if let Some(dc) = active.first_mut() {
        *dc = true;
    }
    for i in plan.indices() {
        if let Some(a) = active.get_mut(i) {
            *a = true;
        }
    }
    let mut bins: Vec<SpectrumBin> = coeffs
        .iter()
        .enumerate()
        .map(|(index, c)| SpectrumBin {
            index,
            frequency: freqs.get(index).copied().unwrap_or(0),
            magnitude: c.norm(),
            active: active[index],
        })
        .collect();
    bins.sort_by_key(|b| b.frequency);
    bins
}

/// Magnitude in decibels, floored to avoid `-inf`.
pub fn to_db(magnitude: f64) -> f64 {
    20.0 * magnitude.max(1e-12).log10()
}
