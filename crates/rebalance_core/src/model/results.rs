//! Simulation and backtest results
//!
//! Output types of the two pipelines: the simulated path matrix with its
//! terminal-value summary, and the backtest equity curves with their
//! performance statistics.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::equity::EquityCurve;
use crate::histogram::Histogram;
use crate::metrics::PerformanceStats;
use crate::percentiles::{PercentileSet, percentile};

/// Days × simulations grid of simulated portfolio values.
///
/// Stored column-major: `paths[i]` is the full trajectory of simulation `i`.
/// The matrix is fully materialized before any statistic is taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPaths {
    days: usize,
    paths: Vec<Vec<f64>>,
}

impl SimulatedPaths {
    #[must_use]
    pub fn new(days: usize, paths: Vec<Vec<f64>>) -> Self {
        debug_assert!(paths.iter().all(|p| p.len() == days));
        Self { days, paths }
    }

    #[must_use]
    pub fn days(&self) -> usize {
        self.days
    }

    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn paths(&self) -> &[Vec<f64>] {
        &self.paths
    }

    /// Final-day value of every path
    #[must_use]
    pub fn terminal_values(&self) -> Vec<f64> {
        self.paths
            .iter()
            .filter_map(|p| p.last().copied())
            .collect()
    }

    /// One row of the matrix: every path's value on `day`
    #[must_use]
    pub fn day_values(&self, day: usize) -> Vec<f64> {
        self.paths.iter().map(|p| p[day]).collect()
    }

    /// Per-day percentile across all paths (`p` in `[0, 1]`)
    #[must_use]
    pub fn percentile_path(&self, p: f64) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.paths.len());
        (0..self.days)
            .map(|day| {
                row.clear();
                row.extend(self.paths.iter().map(|path| path[day]));
                percentile(&row, p).unwrap_or(f64::NAN)
            })
            .collect()
    }

    /// The first `count` paths, for plotting
    #[must_use]
    pub fn sample_paths(&self, count: usize) -> &[Vec<f64>] {
        &self.paths[..count.min(self.paths.len())]
    }
}

/// Summary of the terminal value set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminalSummary {
    pub initial: f64,
    pub count: usize,
    pub median: f64,
    pub p5: f64,
    pub p95: f64,
    /// Fraction of paths ending strictly below the initial investment
    pub prob_loss: f64,
}

impl TerminalSummary {
    /// Returns `None` when there are no terminal values.
    #[must_use]
    pub fn from_terminal_values(values: &[f64], initial: f64) -> Option<Self> {
        let PercentileSet { p5, p50, p95 } = PercentileSet::from_values(values)?;
        let losses = values.iter().filter(|v| **v < initial).count();
        Some(Self {
            initial,
            count: values.len(),
            median: p50,
            p5,
            p95,
            prob_loss: losses as f64 / values.len() as f64,
        })
    }

    #[must_use]
    pub fn from_paths(paths: &SimulatedPaths, initial: f64) -> Option<Self> {
        Self::from_terminal_values(&paths.terminal_values(), initial)
    }
}

/// A named equity curve together with its statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyResult {
    pub curve: EquityCurve,
    pub stats: Option<PerformanceStats>,
}

/// Output of the historical backtest pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    pub benchmark: StrategyResult,
    pub portfolio: StrategyResult,
    pub rebalance_dates: Vec<Date>,
}

/// Output of the Monte Carlo pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloReport {
    pub years: usize,
    /// Number of historical daily returns in the resampling pool
    pub pool_size: usize,
    pub paths: SimulatedPaths,
    pub summary: TerminalSummary,
    pub median_path: Vec<f64>,
    pub p5_path: Vec<f64>,
    pub histogram: Histogram,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_matrix() -> SimulatedPaths {
        SimulatedPaths::new(
            3,
            vec![
                vec![100.0, 110.0, 120.0],
                vec![100.0, 90.0, 80.0],
                vec![100.0, 100.0, 100.0],
                vec![100.0, 105.0, 130.0],
            ],
        )
    }

    #[test]
    fn test_terminal_values_and_rows() {
        let paths = small_matrix();
        assert_eq!(paths.terminal_values(), vec![120.0, 80.0, 100.0, 130.0]);
        assert_eq!(paths.day_values(1), vec![110.0, 90.0, 100.0, 105.0]);
        assert_eq!(paths.sample_paths(2).len(), 2);
        assert_eq!(paths.sample_paths(10).len(), 4);
    }

    #[test]
    fn test_percentile_path_median() {
        let paths = small_matrix();
        let median = paths.percentile_path(0.5);
        assert_eq!(median, vec![100.0, 102.5, 110.0]);
    }

    #[test]
    fn test_terminal_summary() {
        let paths = small_matrix();
        let summary = TerminalSummary::from_paths(&paths, 100.0).unwrap();

        assert_eq!(summary.count, 4);
        assert!((summary.median - 110.0).abs() < 1e-12);
        // Only the 80.0 path is strictly below 100.0
        assert!((summary.prob_loss - 0.25).abs() < 1e-12);
        assert!(summary.p5 <= summary.median && summary.median <= summary.p95);
    }

    #[test]
    fn test_terminal_summary_empty() {
        assert!(TerminalSummary::from_terminal_values(&[], 100.0).is_none());
    }

    #[test]
    fn test_terminal_summary_with_nan_path() {
        let paths = SimulatedPaths::new(1, vec![vec![f64::NAN], vec![5.0], vec![20.0]]);
        let summary = TerminalSummary::from_paths(&paths, 10.0).unwrap();

        assert!(summary.median.is_nan());
        assert!(summary.p5.is_nan());
        assert!(summary.p95.is_nan());
        assert_eq!(summary.count, 3);
    }
}
