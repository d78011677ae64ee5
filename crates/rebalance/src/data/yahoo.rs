//! Yahoo Finance daily closes
//!
//! Uses the v8 chart endpoint, one request per ticker. Adjusted closes are
//! taken from `indicators.adjclose`; when a response has none the raw
//! `quote.close` series is used instead.

use std::collections::BTreeMap;

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use rebalance_core::model::PriceSeries;
use serde::Deserialize;

use super::{DataError, PriceSource, join_columns};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Debug, Deserialize)]
struct YahooResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    meta: Option<ChartMeta>,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    /// Exchange offset from UTC in seconds
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteData>,
    #[serde(default)]
    adjclose: Vec<AdjCloseData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// Parse a chart response body into `date -> adjusted close`.
///
/// Days with a null price are skipped.
pub fn parse_chart(ticker: &str, body: &str) -> Result<BTreeMap<Date, f64>, DataError> {
    let response: YahooResponse = serde_json::from_str(body)
        .map_err(|e| DataError::Parse(format!("chart response for {ticker}: {e}")))?;

    if let Some(error) = response.chart.error {
        return Err(DataError::Api {
            ticker: ticker.to_string(),
            code: error.code,
            description: error.description,
        });
    }

    let data = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| DataError::NoData(ticker.to_string()))?;

    let offset = data.meta.map_or(0, |m| m.gmtoffset);
    let Indicators { quote, adjclose } = data.indicators;
    let closes = match adjclose.into_iter().next() {
        Some(adj) if !adj.adjclose.is_empty() => adj.adjclose,
        _ => {
            tracing::warn!(ticker, "no adjusted closes, falling back to raw closes");
            quote
                .into_iter()
                .next()
                .map(|q| q.close)
                .unwrap_or_default()
        }
    };

    let mut prices = BTreeMap::new();
    for (&ts, close) in data.timestamp.iter().zip(&closes) {
        let Some(close) = *close else { continue };
        let date = Timestamp::from_second(ts + offset)
            .map_err(|e| DataError::Parse(format!("timestamp {ts} for {ticker}: {e}")))?
            .to_zoned(TimeZone::UTC)
            .date();
        prices.insert(date, close);
    }
    Ok(prices)
}

/// Seconds since the Unix epoch at midnight UTC of `date`
fn epoch_seconds(date: Date) -> Result<i64, DataError> {
    date.to_zoned(TimeZone::UTC)
        .map(|z| z.timestamp().as_second())
        .map_err(|e| DataError::Parse(format!("date {date}: {e}")))
}

/// Blocking Yahoo Finance client
pub struct YahooSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl YahooSource {
    pub fn new() -> Result<Self, DataError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| DataError::Http(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn chart_url(&self, ticker: &str, start: Date, end: Date) -> Result<String, DataError> {
        Ok(format!(
            "{}/v8/finance/chart/{}?interval=1d&period1={}&period2={}&events=div,split",
            self.base_url,
            ticker,
            epoch_seconds(start)?,
            epoch_seconds(end)?
        ))
    }

    /// Adjusted closes of one ticker within `[start, end)`
    pub fn fetch_ticker(
        &self,
        ticker: &str,
        start: Date,
        end: Date,
    ) -> Result<BTreeMap<Date, f64>, DataError> {
        let url = self.chart_url(ticker, start, end)?;
        tracing::info!(ticker, url = %url, "fetching chart");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::Http(format!("request for {ticker} failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DataError::Http(format!("reading response for {ticker}: {e}")))?;

        // Error responses still carry a chart.error object worth reporting
        let mut prices = match parse_chart(ticker, &body) {
            Err(DataError::Parse(_)) if !status.is_success() => {
                return Err(DataError::Http(format!("{ticker}: HTTP {status}")));
            }
            other => other?,
        };
        prices.retain(|date, _| (start..end).contains(date));

        tracing::info!(ticker, days = prices.len(), "fetched closes");
        Ok(prices)
    }
}

impl PriceSource for YahooSource {
    fn fetch(&self, tickers: &[String], start: Date, end: Date) -> Result<PriceSeries, DataError> {
        let columns = tickers
            .iter()
            .map(|ticker| Ok((ticker.clone(), self.fetch_ticker(ticker, start, end)?)))
            .collect::<Result<Vec<_>, DataError>>()?;
        join_columns(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    // 2024-01-02 and 2024-01-03 at 14:30 UTC (09:30 New York)
    const CHART_FIXTURE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "SPY", "gmtoffset": -18000},
                "timestamp": [1704205800, 1704292200, 1704378600],
                "indicators": {
                    "quote": [{"close": [472.65, 468.79, null]}],
                    "adjclose": [{"adjclose": [462.10, 458.33, null]}]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_chart_uses_adjusted_closes() {
        let prices = parse_chart("SPY", CHART_FIXTURE).unwrap();

        assert_eq!(prices.len(), 2);
        assert_eq!(prices[&date(2024, 1, 2)], 462.10);
        assert_eq!(prices[&date(2024, 1, 3)], 458.33);
    }

    #[test]
    fn test_parse_chart_falls_back_to_close() {
        let body = r#"{"chart": {"result": [{
            "timestamp": [1704205800],
            "indicators": {"quote": [{"close": [472.65]}]}
        }], "error": null}}"#;

        let prices = parse_chart("SPY", body).unwrap();
        assert_eq!(prices[&date(2024, 1, 2)], 472.65);
    }

    #[test]
    fn test_parse_chart_api_error() {
        let body = r#"{"chart": {"result": null, "error": {
            "code": "Not Found",
            "description": "No data found, symbol may be delisted"
        }}}"#;

        match parse_chart("NOPE", body) {
            Err(DataError::Api { ticker, code, .. }) => {
                assert_eq!(ticker, "NOPE");
                assert_eq!(code, "Not Found");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_chart_rejects_garbage() {
        assert!(matches!(
            parse_chart("SPY", "<html>"),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_chart_url() {
        let source = YahooSource::with_base_url("http://localhost").unwrap();
        let url = source
            .chart_url("AGG", date(2005, 1, 1), date(2025, 1, 1))
            .unwrap();

        assert_eq!(
            url,
            "http://localhost/v8/finance/chart/AGG?interval=1d&period1=1104537600&period2=1735689600&events=div,split"
        );
    }
}
