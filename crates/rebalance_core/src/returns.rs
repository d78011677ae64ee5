//! Daily return series

use crate::error::{AnalysisError, Result};
use crate::model::{PriceSeries, Weights};

/// Simple day-over-day returns: `v[t] / v[t-1] - 1` for `t >= 1`.
#[must_use]
pub fn daily_returns(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Fixed-weight blended daily return of the price series.
///
/// `r[t] = sum_i w[i] * (p[i][t] / p[i][t-1] - 1)` for every day after the
/// first. This treats the portfolio as continuously rebalanced to its target
/// weights, unlike [`crate::rebalance::rebalanced_equity`].
pub fn blended_returns(prices: &PriceSeries, weights: &Weights) -> Result<Vec<f64>> {
    weights.check_len(prices.tickers().len())?;
    if prices.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            needed: 2,
            found: prices.len(),
        });
    }

    let w = weights.as_slice();
    Ok(prices
        .rows()
        .windows(2)
        .map(|pair| {
            pair[1]
                .iter()
                .zip(&pair[0])
                .zip(w)
                .map(|((today, yesterday), weight)| weight * (today / yesterday - 1.0))
                .sum()
        })
        .collect())
}
