//! Percentile extraction for simulation results
//!
//! Uses linear interpolation between closest ranks, the default method of
//! numpy's `percentile`.

/// Standard percentiles used in reports
pub mod standard {
    pub const P5: f64 = 0.05;
    pub const P50: f64 = 0.50;
    pub const P95: f64 = 0.95;
}

/// Linear-interpolation percentile of `values`, with `p` in `[0, 1]`.
///
/// Returns `None` for empty input or `p` outside `[0, 1]`, and NaN when
/// any value is NaN.
///
/// # Example
/// ```
/// use rebalance_core::percentiles::percentile;
/// assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 0.5), Some(2.5));
/// ```
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if values.iter().any(|v| v.is_nan()) {
        return Some(f64::NAN);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(percentile_sorted(&sorted, p))
}

/// Percentile of an already ascending-sorted, non-empty slice.
#[must_use]
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Standard percentile set (P5, P50, P95)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileSet {
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

impl PercentileSet {
    /// Sorts once and extracts all three percentiles.
    ///
    /// Returns `None` for empty input. A single NaN makes every
    /// percentile NaN.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        if values.iter().any(|v| v.is_nan()) {
            return Some(Self {
                p5: f64::NAN,
                p50: f64::NAN,
                p95: f64::NAN,
            });
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            p5: percentile_sorted(&sorted, standard::P5),
            p50: percentile_sorted(&sorted, standard::P50),
            p95: percentile_sorted(&sorted, standard::P95),
        })
    }
}
