//! Tests for the bootstrap Monte Carlo pipeline
//!
//! These tests verify that:
//! - A fixed master seed reproduces the whole report
//! - Terminal percentiles are ordered and the loss probability is a fraction
//! - The median and 5th percentile paths span the full horizon
//! - Every terminal value is either binned or counted as clipped

use jiff::civil::date;

use super::synthetic_two_asset;
use crate::config::{MonteCarloConfig, PortfolioConfig};
use crate::error::{AnalysisError, SimulationError};
use crate::model::PriceSeries;
use crate::run_monte_carlo;
use crate::simulation::bootstrap_path;

fn portfolio() -> PortfolioConfig {
    PortfolioConfig {
        tickers: vec!["SPY".into(), "AGG".into()],
        weights: vec![0.6, 0.4],
        start_date: date(1990, 1, 1),
        end_date: date(2100, 1, 1),
    }
}

fn small_run(seed: Option<u64>) -> MonteCarloConfig {
    MonteCarloConfig {
        years: 1,
        n_simulations: 200,
        initial_investment: 10_000.0,
        seed,
        histogram_bins: 20,
        histogram_max: 20_000.0,
        ..Default::default()
    }
}

#[test]
fn test_fixed_seed_reproduces_report() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 400);

    let a = run_monte_carlo(&prices, &portfolio(), &small_run(Some(7))).unwrap();
    let b = run_monte_carlo(&prices, &portfolio(), &small_run(Some(7))).unwrap();

    assert_eq!(a.paths, b.paths);
    assert_eq!(a.summary, b.summary);
    assert_eq!(a.median_path, b.median_path);
    assert_eq!(a.histogram, b.histogram);
}

#[test]
fn test_terminal_summary_is_ordered() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 400);
    let report = run_monte_carlo(&prices, &portfolio(), &small_run(Some(11))).unwrap();
    let summary = report.summary;

    assert_eq!(summary.count, 200);
    assert_eq!(summary.initial, 10_000.0);
    assert!(summary.p5 <= summary.median);
    assert!(summary.median <= summary.p95);
    assert!((0.0..=1.0).contains(&summary.prob_loss));
}

#[test]
fn test_percentile_paths_span_horizon() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 400);
    let config = MonteCarloConfig {
        years: 2,
        ..small_run(Some(3))
    };
    let report = run_monte_carlo(&prices, &portfolio(), &config).unwrap();

    assert_eq!(report.paths.days(), 504);
    assert_eq!(report.median_path.len(), 504);
    assert_eq!(report.p5_path.len(), 504);
    assert!(
        report
            .median_path
            .iter()
            .zip(&report.p5_path)
            .all(|(m, p5)| p5 <= m)
    );
    // Median path ends at the median terminal value
    assert_eq!(report.median_path.last().copied(), Some(report.summary.median));
}

#[test]
fn test_histogram_accounts_for_every_path() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 400);
    let report = run_monte_carlo(&prices, &portfolio(), &small_run(Some(5))).unwrap();
    let hist = &report.histogram;

    assert_eq!(hist.counts.len(), 20);
    assert_eq!(hist.counts.iter().sum::<usize>() + hist.clipped, 200);
}

#[test]
fn test_pool_size_is_one_less_than_window() {
    let prices = synthetic_two_asset(date(2019, 6, 3), 400);
    let report = run_monte_carlo(&prices, &portfolio(), &small_run(Some(1))).unwrap();

    assert_eq!(report.pool_size, 399);
    assert_eq!(report.years, 1);
}

/// Pool [+1%, -1%] drawn in order from 100: 100 × 1.01 × 0.99 = 99.99
#[test]
fn test_two_day_hand_computed_path() {
    let path = bootstrap_path(&[0.01, -0.01], &[0, 1], 100.0);
    assert!((path[1] - 99.99).abs() < 1e-9);

    // Order of draws does not change the product
    let reversed = bootstrap_path(&[0.01, -0.01], &[1, 0], 100.0);
    assert!((reversed[1] - 99.99).abs() < 1e-9);
}

#[test]
fn test_single_price_row_has_no_pool() {
    let prices = PriceSeries::new(
        vec!["SPY".into(), "AGG".into()],
        vec![date(2023, 5, 1)],
        vec![vec![100.0, 50.0]],
    )
    .unwrap();

    let result = run_monte_carlo(&prices, &portfolio(), &small_run(Some(1)));
    assert!(matches!(
        result,
        Err(AnalysisError::InsufficientData { .. })
            | Err(AnalysisError::Simulation(SimulationError::EmptyReturnPool))
    ));
}
