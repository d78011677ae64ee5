//! Performance statistics over an equity curve
//!
//! All annualization uses 252 trading days per year and a zero risk-free
//! rate.

use serde::{Deserialize, Serialize};

use crate::TRADING_DAYS_PER_YEAR;
use crate::returns::daily_returns;

/// Summary numbers of a realized equity curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Compound annual growth rate
    pub cagr: f64,
    /// Annualized mean return over annualized volatility.
    /// `None` when volatility is zero or there are fewer than two returns.
    pub sharpe: Option<f64>,
    /// Most negative `equity / running_max - 1`; always `<= 0`
    pub max_drawdown: f64,
    /// Annualized standard deviation of daily returns
    pub volatility: f64,
    pub total_return: f64,
    pub trading_days: usize,
}

impl PerformanceStats {
    /// Compute statistics from curve values. Returns `None` for fewer than
    /// two values.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (&start, &end) = (values.first()?, values.last()?);
        if values.len() < 2 {
            return None;
        }

        let returns = daily_returns(values);
        let n_days = values.len();
        let (mean, std) = mean_and_sample_std(&returns);
        let annual = TRADING_DAYS_PER_YEAR as f64;
        let volatility = std.map_or(0.0, |s| s * annual.sqrt());

        Some(Self {
            cagr: cagr(start, end, n_days),
            sharpe: std
                .filter(|s| *s > 0.0)
                .map(|s| (mean * annual) / (s * annual.sqrt())),
            max_drawdown: max_drawdown(values),
            volatility,
            total_return: end / start - 1.0,
            trading_days: n_days,
        })
    }
}

/// `(end / start)^(252 / n_days) - 1`
#[must_use]
pub fn cagr(start: f64, end: f64, n_days: usize) -> f64 {
    let years = n_days as f64 / TRADING_DAYS_PER_YEAR as f64;
    (end / start).powf(1.0 / years) - 1.0
}

/// Minimum of `value / running_max - 1` over the curve.
#[must_use]
pub fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for &v in values {
        peak = peak.max(v);
        worst = worst.min(v / peak - 1.0);
    }
    worst
}

/// Mean and sample standard deviation (n - 1 denominator).
/// The standard deviation is `None` for fewer than two observations.
fn mean_and_sample_std(values: &[f64]) -> (f64, Option<f64>) {
    if values.is_empty() {
        return (f64::NAN, None);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, None);
    }
    let variance = values.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, Some(variance.sqrt()))
}
