use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rebalance::config::{Overrides, load_config};
use rebalance::data::{CsvSource, PriceSource, YahooSource, load_prices};
use rebalance::{App, init_logging, report};
use rebalance_core::{run_backtest, run_monte_carlo};

#[derive(Parser, Debug)]
#[command(name = "rebalance")]
#[command(about = "Backtest a rebalanced portfolio and stress it with a bootstrap Monte Carlo")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// YAML configuration file (defaults are used for missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read prices from a wide CSV file instead of Yahoo Finance
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Master seed for the simulation
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulated paths
    #[arg(short = 'n', long)]
    simulations: Option<usize>,

    /// Simulation horizon in years
    #[arg(short, long)]
    years: Option<usize>,

    /// Print the report only, without the chart viewer
    #[arg(long)]
    no_chart: bool,

    /// Path to the data directory (default: ~/.rebalance/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Historical backtest against the benchmark
    Backtest,
    /// Bootstrap Monte Carlo of future outcomes
    Simulate,
    /// Both
    All,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rebalance")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    init_logging(&data_dir, &args.log_level)?;

    let mut config = load_config(args.config.as_deref())?;
    Overrides {
        seed: args.seed,
        simulations: args.simulations,
        years: args.years,
    }
    .apply(&mut config);
    config.validate()?;

    let command = args.command.unwrap_or(Command::All);
    let run_backtest_step = matches!(command, Command::Backtest | Command::All);
    let run_simulation_step = matches!(command, Command::Simulate | Command::All);

    // The benchmark is only needed for the backtest
    let tickers = if run_backtest_step {
        config.all_tickers()
    } else {
        config.portfolio.tickers.clone()
    };
    let source: Box<dyn PriceSource> = match &args.csv {
        Some(path) => Box::new(CsvSource::new(path)),
        None => Box::new(YahooSource::new()?),
    };

    println!("FETCHING HISTORICAL DATA FOR {tickers:?}...");
    let prices = load_prices(
        &*source,
        &config,
        run_backtest_step,
        run_simulation_step,
    )?;
    tracing::info!(?command, "prices loaded");

    let backtest = match &prices.backtest {
        Some(prices) => {
            let result = run_backtest(prices, &config.portfolio, &config.backtest)?;
            print!("{}", report::format_backtest(&result));
            Some(result)
        }
        None => None,
    };

    let monte_carlo = match &prices.simulation {
        Some(prices) => {
            println!(
                "SIMULATING {} YEARS INTO THE FUTURE...",
                config.monte_carlo.years
            );
            let result = run_monte_carlo(prices, &config.portfolio, &config.monte_carlo)?;
            print!("{}", report::format_monte_carlo(&result));
            Some(result)
        }
        None => None,
    };

    if args.no_chart {
        return Ok(());
    }

    let mut app = App::new(backtest, monte_carlo, config.monte_carlo.chart_paths);
    if app.has_views() {
        ratatui::run(|terminal| app.run(terminal))?;
        tracing::info!("chart viewer closed");
    }

    Ok(())
}
