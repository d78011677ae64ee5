mod equity;
mod pool;
mod prices;
mod results;
mod weights;

pub use equity::EquityCurve;
pub use pool::{PoolStatistics, ReturnPool};
pub use prices::PriceSeries;
pub use results::{
    BacktestReport, MonteCarloReport, SimulatedPaths, StrategyResult, TerminalSummary,
};
pub use weights::{WEIGHT_SUM_TOLERANCE, Weights};
