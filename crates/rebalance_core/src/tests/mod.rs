//! Integration tests for the backtest and Monte Carlo pipelines
//!
//! Tests are organized by topic:
//! - `backtest` - Rebalancing walk and performance statistics end to end
//! - `monte_carlo` - Bootstrap simulation and terminal-value aggregation

mod backtest;
mod monte_carlo;

use jiff::civil::{Date, Weekday};

use crate::model::PriceSeries;

/// Weekday dates starting at `start`, `count` of them.
pub(crate) fn trading_days(start: Date, count: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(count);
    let mut d = start;
    while dates.len() < count {
        if !matches!(d.weekday(), Weekday::Saturday | Weekday::Sunday) {
            dates.push(d);
        }
        d = d.tomorrow().unwrap();
    }
    dates
}

/// Two-asset series with a trending, oscillating stock and a slow bond.
pub(crate) fn synthetic_two_asset(start: Date, count: usize) -> PriceSeries {
    let dates = trading_days(start, count);
    let rows = (0..count)
        .map(|i| {
            let t = i as f64;
            let stock = 100.0 * (1.0 + 0.0004 * t) * (1.0 + 0.08 * (t / 40.0).sin());
            let bond = 50.0 * (1.0 + 0.0001 * t) * (1.0 + 0.01 * (t / 15.0).cos());
            vec![stock, bond]
        })
        .collect();
    PriceSeries::new(vec!["SPY".into(), "AGG".into()], dates, rows).unwrap()
}
