use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::returns::daily_returns;

/// Portfolio value per trading day, starting at the initial value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityCurve {
    pub name: String,
    pub dates: Vec<Date>,
    pub values: Vec<f64>,
}

impl EquityCurve {
    #[must_use]
    pub fn new(name: impl Into<String>, dates: Vec<Date>, values: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self {
            name: name.into(),
            dates,
            values,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn start_value(&self) -> Option<f64> {
        self.values.first().copied()
    }

    #[must_use]
    pub fn end_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    #[must_use]
    pub fn daily_returns(&self) -> Vec<f64> {
        daily_returns(&self.values)
    }

    /// `(date, value)` pairs, used for charting.
    pub fn points(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}
