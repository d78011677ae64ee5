//! Tests for the historical backtest pipeline
//!
//! These tests verify that:
//! - Both equity curves start at the initial value on the first trading day
//! - Rebalancing happens on every trading day in January 1-7 and nowhere else
//! - A rebalance preserves wealth at the instant it occurs
//! - The date window is applied before the walk

use jiff::civil::date;

use super::synthetic_two_asset;
use crate::config::{BacktestConfig, PortfolioConfig};
use crate::metrics::PerformanceStats;
use crate::model::{PriceSeries, Weights};
use crate::rebalance::{is_rebalance_date, rebalanced_equity};
use crate::run_backtest;

fn portfolio(tickers: &[&str], weights: &[f64]) -> PortfolioConfig {
    PortfolioConfig {
        tickers: tickers.iter().map(|t| t.to_string()).collect(),
        weights: weights.to_vec(),
        start_date: date(1990, 1, 1),
        end_date: date(2100, 1, 1),
    }
}

fn backtest(benchmark: &str, initial_value: f64) -> BacktestConfig {
    BacktestConfig {
        benchmark: benchmark.to_string(),
        initial_value,
        ..Default::default()
    }
}

/// Single asset, weight 1.0, no January dates: [100, 110, 121] -> [1.0, 1.1, 1.21]
#[test]
fn test_single_asset_scenario() {
    let prices = PriceSeries::new(
        vec!["A".into()],
        vec![date(2023, 5, 1), date(2023, 5, 2), date(2023, 5, 3)],
        vec![vec![100.0], vec![110.0], vec![121.0]],
    )
    .unwrap();

    let report = run_backtest(&prices, &portfolio(&["A"], &[1.0]), &backtest("A", 1.0)).unwrap();

    assert!(report.rebalance_dates.is_empty());
    for curve in [&report.portfolio.curve, &report.benchmark.curve] {
        assert_eq!(curve.len(), 3);
        for (v, e) in curve.values.iter().zip([1.0, 1.1, 1.21]) {
            assert!((v - e).abs() < 1e-12, "{}: got {v}, expected {e}", curve.name);
        }
    }

    let stats = report.portfolio.stats.unwrap();
    let expected_cagr = 1.21_f64.powf(252.0 / 3.0) - 1.0;
    assert!((stats.cagr - expected_cagr).abs() / expected_cagr < 1e-9);
    assert_eq!(stats.max_drawdown, 0.0);
}

#[test]
fn test_curves_start_at_initial_value() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 600);
    let report = run_backtest(
        &prices,
        &portfolio(&["SPY", "AGG"], &[0.6, 0.4]),
        &backtest("SPY", 10_000.0),
    )
    .unwrap();

    assert_eq!(report.portfolio.curve.values[0], 10_000.0);
    assert_eq!(report.benchmark.curve.values[0], 10_000.0);
    assert_eq!(report.portfolio.curve.len(), prices.len());
    assert_eq!(report.benchmark.curve.len(), prices.len());
}

#[test]
fn test_rebalances_on_every_first_week_trading_day() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 600);
    let weights = Weights::new(vec![0.6, 0.4]).unwrap();

    let walk = rebalanced_equity("60/40", &prices, &weights, 1.0).unwrap();

    let expected: Vec<_> = prices
        .dates()
        .iter()
        .copied()
        .filter(|d| is_rebalance_date(*d))
        .collect();
    assert_eq!(walk.rebalance_dates, expected);
    // 2020-01-01..03, 2020-01-06..07, 2021-01-01, 2021-01-04..07
    assert_eq!(expected.len(), 10);
}

#[test]
fn test_late_first_trading_day_skips_rebalance() {
    let prices = PriceSeries::new(
        vec!["SPY".into(), "AGG".into()],
        vec![date(2021, 12, 30), date(2022, 1, 10), date(2022, 1, 11)],
        vec![vec![100.0, 50.0], vec![120.0, 50.0], vec![130.0, 51.0]],
    )
    .unwrap();
    let weights = Weights::new(vec![0.5, 0.5]).unwrap();

    let walk = rebalanced_equity("50/50", &prices, &weights, 1.0).unwrap();

    assert!(walk.rebalance_dates.is_empty());
    // Holdings never change: 0.005 SPY + 0.01 AGG
    assert!((walk.curve.values[2] - (0.005 * 130.0 + 0.01 * 51.0)).abs() < 1e-12);
}

#[test]
fn test_rebalance_preserves_wealth() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 600);
    let w = [0.6, 0.4];
    let weights = Weights::new(w.to_vec()).unwrap();
    let walk = rebalanced_equity("60/40", &prices, &weights, 1.0).unwrap();
    let values = &walk.curve.values;
    let rows = prices.rows();

    for (t, date) in prices.dates().iter().enumerate() {
        if !is_rebalance_date(*date) || t + 1 == rows.len() {
            continue;
        }
        // Right after the rebalance the portfolio holds exactly w[i] of value_t
        // in each ticker, so the next day's value follows from price moves alone.
        let growth: f64 = w
            .iter()
            .enumerate()
            .map(|(i, wi)| wi * rows[t + 1][i] / rows[t][i])
            .sum();
        let expected = values[t] * growth;
        assert!(
            (values[t + 1] - expected).abs() < 1e-12 * values[t].max(1.0),
            "wealth not preserved across rebalance on {date}"
        );
    }
}

#[test]
fn test_backtest_respects_date_window() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 600);
    let mut config = portfolio(&["SPY", "AGG"], &[0.6, 0.4]);
    config.start_date = date(2020, 1, 1);
    config.end_date = date(2021, 1, 1);

    let report = run_backtest(&prices, &config, &backtest("SPY", 1.0)).unwrap();

    let dates = &report.portfolio.curve.dates;
    assert_eq!(dates.first(), Some(&date(2020, 1, 1)));
    assert!(dates.last().unwrap() < &date(2021, 1, 1));
    // Weekdays in 2020
    assert_eq!(dates.len(), 262);
    assert_eq!(report.portfolio.curve.values[0], 1.0);
}

#[test]
fn test_max_drawdown_never_positive() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 600);
    let report = run_backtest(
        &prices,
        &portfolio(&["SPY", "AGG"], &[0.6, 0.4]),
        &backtest("SPY", 1.0),
    )
    .unwrap();

    for stats in [report.portfolio.stats, report.benchmark.stats] {
        let PerformanceStats { max_drawdown, .. } = stats.unwrap();
        assert!(max_drawdown <= 0.0);
        // Both curves oscillate, so they do draw down
        assert!(max_drawdown < 0.0);
    }
}

#[test]
fn test_benchmark_outside_portfolio() {
    let prices = PriceSeries::new(
        vec!["SPY".into(), "AGG".into(), "QQQ".into()],
        vec![date(2023, 5, 1), date(2023, 5, 2)],
        vec![vec![100.0, 50.0, 200.0], vec![101.0, 50.0, 210.0]],
    )
    .unwrap();

    let report = run_backtest(
        &prices,
        &portfolio(&["SPY", "AGG"], &[0.6, 0.4]),
        &backtest("QQQ", 1.0),
    )
    .unwrap();

    assert!((report.benchmark.curve.values[1] - 1.05).abs() < 1e-12);
    assert!((report.portfolio.curve.values[1] - (1.0 + 0.6 * 0.01)).abs() < 1e-12);
}
