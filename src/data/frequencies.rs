//! Frequency-bin assignment for transform output of a given length.

/// Signed integer frequency per coefficient index.
pub type FrequencySequence = Vec<i64>;

/// Number of non-negative frequency bins among `n` bins: `ceil(n / 2)`.
pub fn half_n(n: usize) -> usize {
    n / 2 + n % 2
}

/// Frequencies for a transform of size `n`.
///
/// Indices `[0, half_n)` carry `0, 1, 2, ...`; the remaining indices, walked
/// from `n - 1` downwards, carry `-1, -2, ...`.
///
/// ```
/// use fourier_sketch::data::frequencies::assign_frequencies;
/// assert_eq!(assign_frequencies(5), vec![0, 1, 2, -2, -1]);
/// assert_eq!(assign_frequencies(6), vec![0, 1, 2, -3, -2, -1]);
/// ```
pub fn assign_frequencies(n: usize) -> FrequencySequence {
    let half = half_n(n);
    let mut freqs = vec![0i64; n];
    for (i, f) in freqs.iter_mut().enumerate().take(half) {
        *f = i as i64;
    }
    for (k, j) in (half..n).rev().enumerate() {
        freqs[j] = -(k as i64) - 1;
    }
    freqs
}
