//! Rebalanced portfolio backtest and bootstrap Monte Carlo library
//!
//! This crate holds the numeric core of the `rebalance` tool:
//! - A day-by-day rebalancing walk that tracks unit holdings and resets them
//!   to target weights in the first week of every January
//! - CAGR, Sharpe-like ratio and max drawdown over an equity curve
//! - Fixed-weight blended daily returns used as a bootstrap pool
//! - i.i.d. bootstrap Monte Carlo of multi-year paths, parallel with rayon
//! - Linear-interpolation percentiles and terminal-value summaries
//!
//! Nothing here performs I/O; price data comes in as a [`model::PriceSeries`].
//!
//! ```ignore
//! use rebalance_core::{AnalysisConfig, run_backtest, run_monte_carlo};
//!
//! let config = AnalysisConfig::default();
//! let backtest = run_backtest(&prices, &config.portfolio, &config.backtest)?;
//! let monte_carlo = run_monte_carlo(&prices, &config.portfolio, &config.monte_carlo)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod histogram;
pub mod metrics;
pub mod percentiles;
pub mod rebalance;
pub mod returns;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{run_backtest, run_monte_carlo};
pub use config::{AnalysisConfig, BacktestConfig, MonteCarloConfig, PortfolioConfig};
pub use error::{AnalysisError, ConfigError, PriceSeriesError, SimulationError, WeightsError};

/// Trading days used to annualize daily figures
pub const TRADING_DAYS_PER_YEAR: usize = 252;
