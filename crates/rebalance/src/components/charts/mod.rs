//! Chart components for the backtest and simulation results.

mod equity;
mod histogram;
mod paths;

pub use equity::render_equity_chart;
pub use histogram::render_terminal_histogram;
pub use paths::render_paths_chart;

/// `(index, value)` points with at most about `max_points` entries.
///
/// Keeps every `n`-th value plus the final one so the curve still ends on
/// its last value.
pub(crate) fn downsample(values: &[f64], max_points: usize) -> Vec<(f64, f64)> {
    let Some(last) = values.len().checked_sub(1) else {
        return Vec::new();
    };
    let step = values.len().div_ceil(max_points.max(2)).max(1);
    let mut points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(i, &v)| (i as f64, v))
        .collect();
    if last % step != 0 {
        points.push((last as f64, values[last]));
    }
    points
}

/// Padded `[min, max]` of the finite values, or `None` if there are none.
pub(crate) fn padded_bounds<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return None;
    }
    let padding = ((max - min) * 0.05).max(max.abs() * 0.01).max(1e-9);
    Some((min - padding, max + padding))
}
