//! Plain-text console report

use rebalance_core::model::{BacktestReport, MonteCarloReport, StrategyResult};

use crate::util::format::{format_currency, format_percentage};

const RULE_WIDTH: usize = 35;

/// Header and one-line statistics of a strategy, followed by a blank line.
pub fn format_strategy(result: &StrategyResult) -> String {
    let mut out = format!("--- {} ---\n", result.curve.name);
    match &result.stats {
        Some(stats) => {
            let sharpe = stats
                .sharpe
                .map_or_else(|| "n/a".to_string(), |s| format!("{s:.2}"));
            out.push_str(&format!(
                "CAGR: {} | Sharpe: {} | Max DD: {}\n",
                format_percentage(stats.cagr),
                sharpe,
                format_percentage(stats.max_drawdown)
            ));
        }
        None => out.push_str("Not enough trading days for statistics\n"),
    }
    out.push('\n');
    out
}

/// Benchmark first, then the rebalanced portfolio.
pub fn format_backtest(report: &BacktestReport) -> String {
    let mut out = format_strategy(&report.benchmark);
    out.push_str(&format_strategy(&report.portfolio));
    out
}

pub fn format_monte_carlo(report: &MonteCarloReport) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let s = &report.summary;

    format!(
        "{rule}\n\
         AUDIT RESULTS AFTER {years} YEARS\n\
         {rule}\n\
         Median Expected Outcome:  {median}\n\
         Worst-Case (5th Pct):     {p5}\n\
         Best-Case (95th Pct):     {p95}\n\
         Probability of Principal Loss: {prob_loss}\n\
         {rule}\n",
        years = report.years,
        median = format_currency(s.median),
        p5 = format_currency(s.p5),
        p95 = format_currency(s.p95),
        prob_loss = format_percentage(s.prob_loss),
    )
}
