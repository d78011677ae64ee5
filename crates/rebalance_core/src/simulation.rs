//! Bootstrap Monte Carlo simulation
//!
//! Every path draws `252 × years` daily returns with replacement from the
//! historical pool and compounds them from the initial investment. Paths are
//! independent, so with the `parallel` feature they are spread over rayon
//! workers. Each path owns its own RNG seeded from a per-path seed drawn in
//! path order from the master seed, which keeps the matrix identical for a
//! given seed no matter how work is scheduled.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::config::MonteCarloConfig;
use crate::error::SimulationError;
use crate::model::{ReturnPool, SimulatedPaths};

/// Build one dollar-value path from pool indices:
/// `initial × cumprod(1 + pool[idx])`.
#[must_use]
pub fn bootstrap_path(pool: &[f64], indices: &[usize], initial: f64) -> Vec<f64> {
    let mut value = initial;
    indices
        .iter()
        .map(|&i| {
            value *= 1.0 + pool[i];
            value
        })
        .collect()
}

/// Simulate a single path of `days` trading days with its own seed.
pub fn simulate_path(
    pool: &ReturnPool,
    days: usize,
    initial: f64,
    seed: u64,
) -> Result<Vec<f64>, SimulationError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let indices = pool
        .sample_indices(&mut rng, days)
        .ok_or(SimulationError::EmptyReturnPool)?;
    Ok(bootstrap_path(&pool.returns, &indices, initial))
}

/// Per-path seeds drawn in path-index order from the master seed.
#[must_use]
pub fn path_seeds(master_seed: u64, count: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(master_seed);
    (0..count).map(|_| rng.next_u64()).collect()
}

/// Run the bootstrap simulation and return the full days × paths matrix.
pub fn monte_carlo_simulate(
    pool: &ReturnPool,
    config: &MonteCarloConfig,
) -> Result<SimulatedPaths, SimulationError> {
    if pool.is_empty() {
        return Err(SimulationError::EmptyReturnPool);
    }
    config.check()?;

    let days = config.horizon_days();
    let master_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let seeds = path_seeds(master_seed, config.n_simulations);

    tracing::debug!(
        pool = pool.len(),
        days,
        simulations = config.n_simulations,
        master_seed,
        "starting bootstrap simulation"
    );

    #[cfg(feature = "parallel")]
    let paths = seeds
        .into_par_iter()
        .map(|seed| simulate_path(pool, days, config.initial_investment, seed))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let paths = seeds
        .into_iter()
        .map(|seed| simulate_path(pool, days, config.initial_investment, seed))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SimulatedPaths::new(days, paths))
}
