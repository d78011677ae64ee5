//! Analysis configuration
//!
//! `AnalysisConfig` holds every parameter of both pipelines. All fields have
//! defaults, so a partial YAML file (or none at all) is valid:
//!
//! ```yaml
//! portfolio:
//!   tickers: [SPY, AGG]
//!   weights: [0.6, 0.4]
//!   start_date: 2005-01-01
//!   end_date: 2025-01-01
//! monte_carlo:
//!   n_simulations: 10000
//!   seed: 42
//! ```

use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SimulationError};
use crate::model::Weights;

fn default_tickers() -> Vec<String> {
    vec!["SPY".to_string(), "AGG".to_string()]
}

fn default_weights() -> Vec<f64> {
    vec![0.6, 0.4]
}

fn default_start_date() -> Date {
    date(2005, 1, 1)
}

fn default_end_date() -> Date {
    date(2025, 1, 1)
}

fn default_benchmark() -> String {
    "SPY".to_string()
}

fn default_benchmark_label() -> String {
    "100% SPY".to_string()
}

fn default_portfolio_label() -> String {
    "60/40 Rebalanced".to_string()
}

fn default_initial_value() -> f64 {
    1.0
}

fn default_years() -> usize {
    20
}

fn default_n_simulations() -> usize {
    10_000
}

fn default_initial_investment() -> f64 {
    10_000.0
}

fn default_chart_paths() -> usize {
    100
}

fn default_histogram_bins() -> usize {
    50
}

fn default_histogram_max() -> f64 {
    250_000.0
}

/// Complete configuration for both pipelines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub portfolio: PortfolioConfig,
    pub backtest: BacktestConfig,
    pub monte_carlo: MonteCarloConfig,
}

impl AnalysisConfig {
    /// Check every section before any data is fetched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.portfolio.validate()?;
        self.backtest.validate()?;
        self.monte_carlo.validate()?;
        Ok(())
    }

    /// Tickers to download: the portfolio tickers plus the benchmark
    #[must_use]
    pub fn all_tickers(&self) -> Vec<String> {
        let mut tickers = self.portfolio.tickers.clone();
        if !tickers.contains(&self.backtest.benchmark) {
            tickers.push(self.backtest.benchmark.clone());
        }
        tickers
    }
}

/// Tickers, target weights and the historical window `[start_date, end_date)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_tickers")]
    pub tickers: Vec<String>,
    #[serde(default = "default_weights")]
    pub weights: Vec<f64>,
    #[serde(default = "default_start_date")]
    pub start_date: Date,
    #[serde(default = "default_end_date")]
    pub end_date: Date,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            tickers: default_tickers(),
            weights: default_weights(),
            start_date: default_start_date(),
            end_date: default_end_date(),
        }
    }
}

impl PortfolioConfig {
    /// Validated target weights
    pub fn weights(&self) -> Result<Weights, ConfigError> {
        let weights = Weights::new(self.weights.clone())?;
        weights.check_len(self.tickers.len())?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights()?;
        if self.start_date >= self.end_date {
            return Err(ConfigError::DateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

/// Historical backtest parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Single-asset benchmark ticker
    #[serde(default = "default_benchmark")]
    pub benchmark: String,
    #[serde(default = "default_benchmark_label")]
    pub benchmark_label: String,
    #[serde(default = "default_portfolio_label")]
    pub portfolio_label: String,
    /// Starting value of both equity curves
    #[serde(default = "default_initial_value")]
    pub initial_value: f64,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            benchmark: default_benchmark(),
            benchmark_label: default_benchmark_label(),
            portfolio_label: default_portfolio_label(),
            initial_value: default_initial_value(),
        }
    }
}

impl BacktestConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.benchmark.trim().is_empty() {
            return Err(ConfigError::EmptyBenchmark);
        }
        if !(self.initial_value.is_finite() && self.initial_value > 0.0) {
            return Err(ConfigError::InvalidInitialValue(self.initial_value));
        }
        Ok(())
    }
}

/// Bootstrap Monte Carlo parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Horizon in years; the path length is `252 × years` trading days
    #[serde(default = "default_years")]
    pub years: usize,
    #[serde(default = "default_n_simulations")]
    pub n_simulations: usize,
    #[serde(default = "default_initial_investment")]
    pub initial_investment: f64,
    /// Master seed. `None` draws a fresh seed from the OS for every run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of sample paths drawn in the path chart
    #[serde(default = "default_chart_paths")]
    pub chart_paths: usize,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Upper end of the terminal-value histogram range (lower end is 0)
    #[serde(default = "default_histogram_max")]
    pub histogram_max: f64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            years: default_years(),
            n_simulations: default_n_simulations(),
            initial_investment: default_initial_investment(),
            seed: None,
            chart_paths: default_chart_paths(),
            histogram_bins: default_histogram_bins(),
            histogram_max: default_histogram_max(),
        }
    }
}

impl MonteCarloConfig {
    /// Simulated path length in trading days
    #[must_use]
    pub fn horizon_days(&self) -> usize {
        crate::TRADING_DAYS_PER_YEAR * self.years
    }

    /// Parameter checks shared with the simulation entry point
    pub fn check(&self) -> Result<(), SimulationError> {
        if self.years == 0 {
            return Err(SimulationError::InvalidHorizon);
        }
        if self.n_simulations == 0 {
            return Err(SimulationError::NoSimulations);
        }
        if !(self.initial_investment.is_finite() && self.initial_investment > 0.0) {
            return Err(SimulationError::InvalidInitialInvestment(
                self.initial_investment,
            ));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check()?;
        if self.histogram_bins == 0 || !(self.histogram_max.is_finite() && self.histogram_max > 0.0)
        {
            return Err(ConfigError::InvalidHistogram {
                bins: self.histogram_bins,
                max: self.histogram_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeightsError;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = AnalysisConfig::default();

        assert_eq!(config.portfolio.tickers, vec!["SPY", "AGG"]);
        assert_eq!(config.portfolio.weights, vec![0.6, 0.4]);
        assert_eq!(config.portfolio.start_date, date(2005, 1, 1));
        assert_eq!(config.portfolio.end_date, date(2025, 1, 1));
        assert_eq!(config.backtest.benchmark, "SPY");
        assert_eq!(config.monte_carlo.n_simulations, 10_000);
        assert_eq!(config.monte_carlo.horizon_days(), 5040);
        assert_eq!(config.monte_carlo.initial_investment, 10_000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_tickers_adds_benchmark_once() {
        let mut config = AnalysisConfig::default();
        assert_eq!(config.all_tickers(), vec!["SPY", "AGG"]);

        config.backtest.benchmark = "QQQ".into();
        assert_eq!(config.all_tickers(), vec!["SPY", "AGG", "QQQ"]);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = AnalysisConfig::default();
        config.portfolio.weights = vec![0.6, 0.6];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Weights(WeightsError::SumNotOne(_)))
        ));

        let mut config = AnalysisConfig::default();
        config.portfolio.weights = vec![1.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Weights(WeightsError::LengthMismatch { .. }))
        ));

        let mut config = AnalysisConfig::default();
        config.portfolio.end_date = config.portfolio.start_date;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DateRange { .. })
        ));

        let mut config = AnalysisConfig::default();
        config.monte_carlo.years = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Simulation(SimulationError::InvalidHorizon))
        );

        let mut config = AnalysisConfig::default();
        config.monte_carlo.histogram_bins = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidHistogram { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"monte_carlo": {"n_simulations": 500, "seed": 9}}"#).unwrap();

        assert_eq!(config.monte_carlo.n_simulations, 500);
        assert_eq!(config.monte_carlo.seed, Some(9));
        assert_eq!(config.monte_carlo.years, 20);
        assert_eq!(config.portfolio, PortfolioConfig::default());
    }
}
