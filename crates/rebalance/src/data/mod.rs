//! Historical price sources
//!
//! A [`PriceSource`] turns a ticker list and a date window into an aligned
//! [`PriceSeries`] of adjusted closes: one column per ticker in request
//! order, only dates where every ticker has a price, dates in `[start, end)`.

mod csv_file;
mod yahoo;

use std::collections::BTreeMap;

use jiff::civil::Date;
use rebalance_core::model::PriceSeries;
use rebalance_core::{AnalysisConfig, PriceSeriesError};

pub use csv_file::CsvSource;
pub use yahoo::YahooSource;

/// Errors raised while loading price data
#[derive(Debug)]
pub enum DataError {
    Http(String),
    /// Error object returned by the quote API
    Api {
        ticker: String,
        code: String,
        description: String,
    },
    NoData(String),
    Io(String),
    Parse(String),
    MissingColumn(String),
    Prices(PriceSeriesError),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Http(msg) => write!(f, "HTTP error: {msg}"),
            DataError::Api {
                ticker,
                code,
                description,
            } => write!(f, "quote API error for {ticker}: {code} - {description}"),
            DataError::NoData(ticker) => write!(f, "no price data for {ticker}"),
            DataError::Io(msg) => write!(f, "IO error: {msg}"),
            DataError::Parse(msg) => write!(f, "Parse error: {msg}"),
            DataError::MissingColumn(ticker) => write!(f, "no column for ticker {ticker}"),
            DataError::Prices(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Prices(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PriceSeriesError> for DataError {
    fn from(e: PriceSeriesError) -> Self {
        DataError::Prices(e)
    }
}

/// Anything that can provide adjusted daily closes
pub trait PriceSource {
    fn fetch(&self, tickers: &[String], start: Date, end: Date) -> Result<PriceSeries, DataError>;
}

/// Inner-join per-ticker columns and fail if a ticker has no prices at all.
fn join_columns(columns: Vec<(String, BTreeMap<Date, f64>)>) -> Result<PriceSeries, DataError> {
    if let Some((ticker, _)) = columns.iter().find(|(_, col)| col.is_empty()) {
        return Err(DataError::NoData(ticker.clone()));
    }
    let prices = PriceSeries::from_columns(columns)?;
    tracing::debug!(
        tickers = prices.tickers().len(),
        days = prices.len(),
        first = ?prices.first_date(),
        last = ?prices.last_date(),
        "aligned price series"
    );
    Ok(prices)
}

/// Price series for each requested analysis
///
/// The backtest series carries the benchmark column. The simulation series
/// holds only the portfolio tickers, so dates missing from the benchmark
/// never shrink the bootstrap pool.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPrices {
    pub backtest: Option<PriceSeries>,
    pub simulation: Option<PriceSeries>,
}

/// Fetch what the backtest and/or simulation need over the portfolio window.
///
/// A single fetch serves both when the benchmark is one of the portfolio
/// tickers.
pub fn load_prices(
    source: &dyn PriceSource,
    config: &AnalysisConfig,
    backtest: bool,
    simulation: bool,
) -> Result<AnalysisPrices, DataError> {
    let portfolio = &config.portfolio;
    let fetch = |tickers: &[String]| {
        source.fetch(tickers, portfolio.start_date, portfolio.end_date)
    };

    let backtest_prices = if backtest {
        Some(fetch(config.all_tickers().as_slice())?)
    } else {
        None
    };

    let shares_fetch = portfolio.tickers.contains(&config.backtest.benchmark);
    let simulation_prices = match (&backtest_prices, simulation) {
        (_, false) => None,
        (Some(prices), true) if shares_fetch => Some(prices.clone()),
        (_, true) => Some(fetch(portfolio.tickers.as_slice())?),
    };

    Ok(AnalysisPrices {
        backtest: backtest_prices,
        simulation: simulation_prices,
    })
}
