//! Command-line front end for the rebalanced portfolio audit
//!
//! Fetches adjusted closes (Yahoo Finance or a local CSV), runs the
//! historical backtest and the bootstrap Monte Carlo from `rebalance_core`,
//! prints the console report and shows the charts in a terminal viewer.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod logging;
pub mod report;
pub mod util;

#[cfg(test)]
mod tests;

pub use app::App;
pub use logging::init_logging;
