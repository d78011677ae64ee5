//! Local CSV price files
//!
//! Wide layout: a `Date` column of ISO dates followed by one column of
//! adjusted closes per ticker, picked by header name. Empty cells are
//! missing prices.
//!
//! ```text
//! Date,SPY,AGG
//! 2005-01-03,83.69,57.21
//! 2005-01-04,82.66,
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use jiff::civil::Date;
use rebalance_core::model::PriceSeries;

use super::{DataError, PriceSource, join_columns};

pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PriceSource for CsvSource {
    fn fetch(&self, tickers: &[String], start: Date, end: Date) -> Result<PriceSeries, DataError> {
        tracing::info!(path = %self.path.display(), "reading price file");

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::Io(format!("{}: {e}", self.path.display())))?;

        let headers = reader
            .headers()
            .map_err(|e| DataError::Parse(format!("CSV header: {e}")))?
            .clone();
        let positions = tickers
            .iter()
            .map(|ticker| {
                headers
                    .iter()
                    .skip(1)
                    .position(|h| h == ticker)
                    .map(|i| i + 1)
                    .ok_or_else(|| DataError::MissingColumn(ticker.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut columns: Vec<BTreeMap<Date, f64>> = vec![BTreeMap::new(); tickers.len()];
        for (line, record) in reader.records().enumerate() {
            // Line 1 is the header
            let line = line + 2;
            let record = record.map_err(|e| DataError::Parse(format!("line {line}: {e}")))?;

            let date: Date = record
                .get(0)
                .unwrap_or_default()
                .parse()
                .map_err(|e| DataError::Parse(format!("line {line}: bad date: {e}")))?;
            if !(start..end).contains(&date) {
                continue;
            }

            for (column, &pos) in columns.iter_mut().zip(&positions) {
                let cell = record.get(pos).unwrap_or_default();
                if cell.is_empty() {
                    continue;
                }
                let price: f64 = cell.parse().map_err(|e| {
                    DataError::Parse(format!("line {line}: bad price {cell:?}: {e}"))
                })?;
                column.insert(date, price);
            }
        }

        join_columns(tickers.iter().cloned().zip(columns).collect())
    }
}
