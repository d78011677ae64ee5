use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::TRADING_DAYS_PER_YEAR;

/// Historical daily returns used as the bootstrap resampling pool.
///
/// Sampling is i.i.d. with replacement: every draw picks a uniformly random
/// day from the pool, ignoring autocorrelation and volatility clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnPool {
    /// Display name, e.g. "60/40 SPY/AGG"
    pub name: String,
    pub returns: Vec<f64>,
}

impl ReturnPool {
    #[must_use]
    pub fn new(name: impl Into<String>, returns: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            returns,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Draw `n` pool indices with replacement.
    pub fn sample_indices<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Option<Vec<usize>> {
        if self.returns.is_empty() {
            return None;
        }
        Some(
            (0..n)
                .map(|_| rng.random_range(0..self.returns.len()))
                .collect(),
        )
    }

    /// Basic statistics of the pool.
    pub fn statistics(&self) -> Option<PoolStatistics> {
        if self.returns.is_empty() {
            return None;
        }
        let n = self.returns.len() as f64;
        let mean = self.returns.iter().sum::<f64>() / n;
        let variance = self
            .returns
            .iter()
            .map(|r| (r - mean).powi(2))
            .sum::<f64>()
            / n;
        let min = self.returns.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .returns
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        Some(PoolStatistics {
            mean_daily: mean,
            std_daily: variance.sqrt(),
            annualized_mean: mean * TRADING_DAYS_PER_YEAR as f64,
            min,
            max,
            days: self.returns.len(),
        })
    }
}

/// Summary statistics of a [`ReturnPool`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolStatistics {
    pub mean_daily: f64,
    /// Population standard deviation
    pub std_daily: f64,
    pub annualized_mean: f64,
    pub min: f64,
    pub max: f64,
    pub days: usize,
}
