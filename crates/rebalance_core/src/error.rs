use std::fmt;

use jiff::civil::Date;

/// Errors raised while building or slicing a price series
#[derive(Debug, Clone, PartialEq)]
pub enum PriceSeriesError {
    NoTickers,
    DuplicateTicker(String),
    UnknownTicker(String),
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnsortedDates {
        index: usize,
        previous: Date,
        current: Date,
    },
    DateCount {
        dates: usize,
        rows: usize,
    },
}

impl fmt::Display for PriceSeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceSeriesError::NoTickers => write!(f, "price series has no tickers"),
            PriceSeriesError::DuplicateTicker(t) => write!(f, "ticker {t} appears more than once"),
            PriceSeriesError::UnknownTicker(t) => write!(f, "ticker {t} not in price series"),
            PriceSeriesError::RowWidth {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} prices, expected {expected}"),
            PriceSeriesError::UnsortedDates {
                index,
                previous,
                current,
            } => write!(
                f,
                "dates must be strictly increasing: {current} at row {index} follows {previous}"
            ),
            PriceSeriesError::DateCount { dates, rows } => {
                write!(f, "{dates} dates given for {rows} price rows")
            }
        }
    }
}

impl std::error::Error for PriceSeriesError {}

/// Errors related to portfolio target weights
#[derive(Debug, Clone, PartialEq)]
pub enum WeightsError {
    Empty,
    InvalidWeight { index: usize, value: f64 },
    SumNotOne(f64),
    LengthMismatch { weights: usize, tickers: usize },
}

impl fmt::Display for WeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightsError::Empty => write!(f, "weight vector is empty"),
            WeightsError::InvalidWeight { index, value } => {
                write!(f, "weight {index} is {value}, expected a finite non-negative number")
            }
            WeightsError::SumNotOne(sum) => write!(f, "weights sum to {sum}, expected 1.0"),
            WeightsError::LengthMismatch { weights, tickers } => {
                write!(f, "{weights} weights given for {tickers} tickers")
            }
        }
    }
}

impl std::error::Error for WeightsError {}

/// Errors related to the bootstrap simulation
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The historical return pool is empty and cannot be sampled
    EmptyReturnPool,
    /// Horizon of zero years
    InvalidHorizon,
    /// Simulation count of zero
    NoSimulations,
    InvalidInitialInvestment(f64),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EmptyReturnPool => write!(f, "historical return pool is empty"),
            SimulationError::InvalidHorizon => write!(f, "simulation horizon must be at least one year"),
            SimulationError::NoSimulations => write!(f, "simulation count must be positive"),
            SimulationError::InvalidInitialInvestment(v) => {
                write!(f, "initial investment must be positive and finite, got {v}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Errors found while validating an analysis configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Weights(WeightsError),
    Simulation(SimulationError),
    DateRange { start: Date, end: Date },
    InvalidInitialValue(f64),
    EmptyBenchmark,
    InvalidHistogram { bins: usize, max: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Weights(e) => write!(f, "{e}"),
            ConfigError::Simulation(e) => write!(f, "{e}"),
            ConfigError::DateRange { start, end } => {
                write!(f, "start date {start} must be before end date {end}")
            }
            ConfigError::InvalidInitialValue(v) => {
                write!(f, "initial value must be positive and finite, got {v}")
            }
            ConfigError::EmptyBenchmark => write!(f, "benchmark ticker is empty"),
            ConfigError::InvalidHistogram { bins, max } => {
                write!(f, "histogram needs bins > 0 and a positive range (bins={bins}, max={max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Weights(e) => Some(e),
            ConfigError::Simulation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WeightsError> for ConfigError {
    fn from(e: WeightsError) -> Self {
        ConfigError::Weights(e)
    }
}

impl From<SimulationError> for ConfigError {
    fn from(e: SimulationError) -> Self {
        ConfigError::Simulation(e)
    }
}

/// Errors returned by the two analysis pipelines
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    Prices(PriceSeriesError),
    Weights(WeightsError),
    Simulation(SimulationError),
    /// Not enough trading days to compute the requested series
    InsufficientData { needed: usize, found: usize },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Prices(e) => write!(f, "{e}"),
            AnalysisError::Weights(e) => write!(f, "{e}"),
            AnalysisError::Simulation(e) => write!(f, "{e}"),
            AnalysisError::InsufficientData { needed, found } => {
                write!(f, "need at least {needed} trading days, found {found}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Prices(e) => Some(e),
            AnalysisError::Weights(e) => Some(e),
            AnalysisError::Simulation(e) => Some(e),
            AnalysisError::InsufficientData { .. } => None,
        }
    }
}

impl From<PriceSeriesError> for AnalysisError {
    fn from(e: PriceSeriesError) -> Self {
        AnalysisError::Prices(e)
    }
}

impl From<WeightsError> for AnalysisError {
    fn from(e: WeightsError) -> Self {
        AnalysisError::Weights(e)
    }
}

impl From<SimulationError> for AnalysisError {
    fn from(e: SimulationError) -> Self {
        AnalysisError::Simulation(e)
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
