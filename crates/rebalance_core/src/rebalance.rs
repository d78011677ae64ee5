//! Historical rebalancing walk
//!
//! Tracks unit holdings day by day. Holdings are held constant while prices
//! move and are re-derived from the current portfolio value on rebalance
//! dates. A rebalance date is any trading day in January 1-7, so a year whose
//! first trading day falls after January 7 is not rebalanced.

use jiff::civil::Date;

use crate::error::{AnalysisError, Result};
use crate::model::{EquityCurve, PriceSeries, Weights};

/// Last January day-of-month that still triggers a rebalance
pub const REBALANCE_WINDOW_LAST_DAY: i8 = 7;

/// Result of a rebalancing walk
#[derive(Debug, Clone)]
pub struct RebalanceWalk {
    pub curve: EquityCurve,
    pub rebalance_dates: Vec<Date>,
}

/// True for dates in the first seven calendar days of January.
#[must_use]
pub fn is_rebalance_date(date: Date) -> bool {
    date.month() == 1 && date.day() <= REBALANCE_WINDOW_LAST_DAY
}

/// Units of each ticker worth `value × weight` at `prices`.
#[must_use]
pub fn target_units(value: f64, weights: &[f64], prices: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .zip(prices)
        .map(|(w, p)| value * w / p)
        .collect()
}

/// Dot product of unit holdings and prices.
#[must_use]
pub fn holdings_value(units: &[f64], prices: &[f64]) -> f64 {
    units.iter().zip(prices).map(|(u, p)| u * p).sum()
}

/// Walk the price series, rebalancing to `weights` in the first week of
/// every January.
///
/// The first curve value is exactly `initial_value` and the curve has one
/// value per trading day. Zero prices are not guarded against.
pub fn rebalanced_equity(
    name: &str,
    prices: &PriceSeries,
    weights: &Weights,
    initial_value: f64,
) -> Result<RebalanceWalk> {
    weights.check_len(prices.tickers().len())?;
    let Some(first) = prices.rows().first() else {
        return Err(AnalysisError::InsufficientData {
            needed: 1,
            found: 0,
        });
    };

    let w = weights.as_slice();
    let mut units = target_units(initial_value, w, first);
    let mut values = Vec::with_capacity(prices.len());
    let mut rebalance_dates = Vec::new();

    for (day, (date, row)) in prices.iter().enumerate() {
        // units · p[0] is the initial value up to rounding
        let value = if day == 0 {
            initial_value
        } else {
            holdings_value(&units, row)
        };
        values.push(value);

        if is_rebalance_date(date) {
            units = target_units(value, w, row);
            rebalance_dates.push(date);
        }
    }

    tracing::debug!(
        name,
        days = values.len(),
        rebalances = rebalance_dates.len(),
        "rebalancing walk complete"
    );

    Ok(RebalanceWalk {
        curve: EquityCurve::new(name, prices.dates().to_vec(), values),
        rebalance_dates,
    })
}

/// Buy-and-hold equity of a single ticker: `initial × p[t] / p[0]`.
pub fn buy_and_hold_equity(
    name: &str,
    prices: &PriceSeries,
    ticker: &str,
    initial_value: f64,
) -> Result<EquityCurve> {
    let column = prices.column(ticker)?;
    let Some(&p0) = column.first() else {
        return Err(AnalysisError::InsufficientData {
            needed: 1,
            found: 0,
        });
    };

    let values = column.iter().map(|p| initial_value * p / p0).collect();
    Ok(EquityCurve::new(name, prices.dates().to_vec(), values))
}
