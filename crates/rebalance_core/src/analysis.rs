//! Pipeline entry points
//!
//! `run_backtest` and `run_monte_carlo` take an already fetched price series
//! and the relevant configuration sections and return everything the console
//! report and the charts need.

use crate::config::{BacktestConfig, MonteCarloConfig, PortfolioConfig};
use crate::error::{AnalysisError, Result};
use crate::histogram::Histogram;
use crate::metrics::PerformanceStats;
use crate::model::{
    BacktestReport, MonteCarloReport, PriceSeries, ReturnPool, StrategyResult, TerminalSummary,
    Weights,
};
use crate::percentiles::standard;
use crate::rebalance::{buy_and_hold_equity, rebalanced_equity};
use crate::returns::blended_returns;
use crate::simulation::monte_carlo_simulate;

/// Historical backtest: rebalanced portfolio versus buy-and-hold benchmark.
pub fn run_backtest(
    prices: &PriceSeries,
    portfolio: &PortfolioConfig,
    backtest: &BacktestConfig,
) -> Result<BacktestReport> {
    let weights = Weights::new(portfolio.weights.clone())?;
    let window = prices.between(portfolio.start_date, portfolio.end_date);
    let holdings = window.select(&portfolio.tickers)?;

    let walk = rebalanced_equity(
        &backtest.portfolio_label,
        &holdings,
        &weights,
        backtest.initial_value,
    )?;
    let benchmark = buy_and_hold_equity(
        &backtest.benchmark_label,
        &window,
        &backtest.benchmark,
        backtest.initial_value,
    )?;

    tracing::info!(
        days = window.len(),
        rebalances = walk.rebalance_dates.len(),
        "backtest complete"
    );

    Ok(BacktestReport {
        benchmark: StrategyResult {
            stats: PerformanceStats::from_values(&benchmark.values),
            curve: benchmark,
        },
        portfolio: StrategyResult {
            stats: PerformanceStats::from_values(&walk.curve.values),
            curve: walk.curve,
        },
        rebalance_dates: walk.rebalance_dates,
    })
}

/// Bootstrap Monte Carlo over the blended daily returns of the portfolio.
pub fn run_monte_carlo(
    prices: &PriceSeries,
    portfolio: &PortfolioConfig,
    config: &MonteCarloConfig,
) -> Result<MonteCarloReport> {
    let weights = Weights::new(portfolio.weights.clone())?;
    let holdings = prices
        .between(portfolio.start_date, portfolio.end_date)
        .select(&portfolio.tickers)?;

    let pool = ReturnPool::new(
        portfolio.tickers.join("/"),
        blended_returns(&holdings, &weights)?,
    );
    if let Some(stats) = pool.statistics() {
        tracing::debug!(
            days = stats.days,
            mean = stats.mean_daily,
            std = stats.std_daily,
            annualized_mean = stats.annualized_mean,
            min = stats.min,
            max = stats.max,
            "return pool ready"
        );
    }

    let paths = monte_carlo_simulate(&pool, config)?;
    let terminal = paths.terminal_values();
    let summary = TerminalSummary::from_terminal_values(&terminal, config.initial_investment)
        .ok_or(AnalysisError::InsufficientData {
            needed: 1,
            found: 0,
        })?;
    let histogram = Histogram::new(
        &terminal,
        config.histogram_bins,
        0.0,
        config.histogram_max,
    );

    tracing::info!(
        simulations = paths.num_paths(),
        median = summary.median,
        prob_loss = summary.prob_loss,
        "monte carlo complete"
    );

    Ok(MonteCarloReport {
        years: config.years,
        pool_size: pool.len(),
        median_path: paths.percentile_path(standard::P50),
        p5_path: paths.percentile_path(standard::P5),
        paths,
        summary,
        histogram,
    })
}
