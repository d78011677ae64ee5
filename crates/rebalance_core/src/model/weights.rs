use serde::{Deserialize, Serialize};

use crate::error::WeightsError;

/// Tolerance when checking that weights sum to one
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Target portfolio fractions, one per ticker, summing to 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Weights(Vec<f64>);

impl Weights {
    pub fn new(weights: Vec<f64>) -> Result<Self, WeightsError> {
        if weights.is_empty() {
            return Err(WeightsError::Empty);
        }
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(WeightsError::InvalidWeight { index, value });
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::SumNotOne(sum));
        }

        Ok(Self(weights))
    }

    /// A single-asset allocation
    #[must_use]
    pub fn single() -> Self {
        Self(vec![1.0])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn check_len(&self, tickers: usize) -> Result<(), WeightsError> {
        if self.0.len() == tickers {
            Ok(())
        } else {
            Err(WeightsError::LengthMismatch {
                weights: self.0.len(),
                tickers,
            })
        }
    }
}

impl TryFrom<Vec<f64>> for Weights {
    type Error = WeightsError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weights> for Vec<f64> {
    fn from(value: Weights) -> Self {
        value.0
    }
}
