//! Date-indexed table of adjusted closing prices

use std::collections::{BTreeMap, HashSet};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::PriceSeriesError;

/// Adjusted closing prices, one row per trading day and one column per ticker.
///
/// Dates are strictly increasing and every row carries a price for every
/// ticker. Rows with missing values are dropped before a series is built
/// (see [`PriceSeries::from_columns`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    tickers: Vec<String>,
    dates: Vec<Date>,
    rows: Vec<Vec<f64>>,
}

impl PriceSeries {
    pub fn new(
        tickers: Vec<String>,
        dates: Vec<Date>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, PriceSeriesError> {
        if tickers.is_empty() {
            return Err(PriceSeriesError::NoTickers);
        }

        let mut seen = HashSet::with_capacity(tickers.len());
        for ticker in &tickers {
            if !seen.insert(ticker.as_str()) {
                return Err(PriceSeriesError::DuplicateTicker(ticker.clone()));
            }
        }

        if dates.len() != rows.len() {
            return Err(PriceSeriesError::DateCount {
                dates: dates.len(),
                rows: rows.len(),
            });
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != tickers.len() {
                return Err(PriceSeriesError::RowWidth {
                    row,
                    expected: tickers.len(),
                    found: values.len(),
                });
            }
        }

        for (index, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(PriceSeriesError::UnsortedDates {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        Ok(Self {
            tickers,
            dates,
            rows,
        })
    }

    /// Inner-join per-ticker columns on date.
    ///
    /// A date is kept only when every ticker has a price for it.
    pub fn from_columns(
        columns: Vec<(String, BTreeMap<Date, f64>)>,
    ) -> Result<Self, PriceSeriesError> {
        let Some((_, first)) = columns.first() else {
            return Err(PriceSeriesError::NoTickers);
        };

        let dates: Vec<Date> = first
            .keys()
            .copied()
            .filter(|date| columns.iter().all(|(_, col)| col.contains_key(date)))
            .collect();

        let rows = dates
            .iter()
            .map(|date| columns.iter().map(|(_, col)| col[date]).collect())
            .collect();

        let tickers = columns.into_iter().map(|(ticker, _)| ticker).collect();
        Self::new(tickers, dates, rows)
    }

    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Iterate `(date, prices)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &[f64])> {
        self.dates
            .iter()
            .copied()
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    #[must_use]
    pub fn ticker_index(&self, ticker: &str) -> Option<usize> {
        self.tickers.iter().position(|t| t == ticker)
    }

    /// Prices of a single ticker over the whole series.
    pub fn column(&self, ticker: &str) -> Result<Vec<f64>, PriceSeriesError> {
        let idx = self
            .ticker_index(ticker)
            .ok_or_else(|| PriceSeriesError::UnknownTicker(ticker.to_string()))?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Copy of the series restricted to `tickers`, in the given order.
    pub fn select<S: AsRef<str>>(&self, tickers: &[S]) -> Result<Self, PriceSeriesError> {
        let indices = tickers
            .iter()
            .map(|t| {
                self.ticker_index(t.as_ref())
                    .ok_or_else(|| PriceSeriesError::UnknownTicker(t.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i]).collect())
            .collect();

        Self::new(
            tickers.iter().map(|t| t.as_ref().to_string()).collect(),
            self.dates.clone(),
            rows,
        )
    }

    /// Rows with `start <= date < end`.
    #[must_use]
    pub fn between(&self, start: Date, end: Date) -> Self {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d < end).max(lo);
        Self {
            tickers: self.tickers.clone(),
            dates: self.dates[lo..hi].to_vec(),
            rows: self.rows[lo..hi].to_vec(),
        }
    }
}
