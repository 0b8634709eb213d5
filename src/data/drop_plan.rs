//! Which frequency terms take part in a frame, given how many the user dropped.
//!
//! Terms are removed from the high-frequency end. Positive and negative bins
//! of the same magnitude form a pair, so removing two terms shortens the pair
//! list by one; removing an odd number additionally hides the negative half
//! of the last remaining pair. For even `n` the Nyquist bin `n/2` has no
//! partner and is the first thing to go once at least two terms are dropped.
//!
//! | n parity | drop_count       | Nyquist | half_n reduction | skip last negative |
//! |----------|------------------|---------|------------------|--------------------|
//! | odd      | d                | -       | d / 2            | d odd              |
//! | even     | 0 or 1           | kept    | 0                | d odd              |
//! | even     | d >= 2           | removed | (d - 1) / 2      | (d - 1) odd        |

use super::frequencies::half_n;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DropPlan {
    /// Number of bins `n` the plan was computed for.
    pub n: usize,
    /// Exclusive upper bound of the positive-side loop `1..half_n`.
    pub half_n: usize,
    /// The unpaired Nyquist bin (even `n` only) is left out.
    pub drop_nyquist: bool,
    /// The negative partner of the final pair is left out.
    pub skip_last_negative: bool,
}

impl DropPlan {
    /// Plan for `n` bins with `drop_count` terms removed. Negative counts are
    /// treated as zero.
    pub fn new(n: usize, drop_count: i64) -> Self {
        let mut drop = drop_count.max(0) as u64;
        let even = n % 2 == 0;
        let drop_nyquist = drop >= 2 && even;
        if drop_nyquist {
            drop -= 1;
        }
        let reduction = usize::try_from(drop / 2).unwrap_or(usize::MAX);
        Self {
            n,
            half_n: half_n(n).saturating_sub(reduction),
            drop_nyquist,
            skip_last_negative: drop % 2 == 1,
        }
    }

    /// Whether the Nyquist bin is processed after the pairs.
    pub fn includes_nyquist(&self) -> bool {
        self.n > 0 && self.n % 2 == 0 && !self.drop_nyquist
    }

    /// Bin indices in the order the chain visits them, not counting the DC
    /// bin 0 which only sets the chain origin.
    pub fn indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.n);
        for i in 1..self.half_n {
            out.push(i);
            if !(i == self.half_n - 1 && self.skip_last_negative) {
                out.push(self.n - i);
            }
        }
        if self.includes_nyquist() {
            out.push(self.n / 2);
        }
        out
    }

    /// Number of rotating vectors drawn per frame.
    pub fn vector_count(&self) -> usize {
        self.indices().len()
    }
}
