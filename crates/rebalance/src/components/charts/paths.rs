//! Simulated wealth paths with the median and 5th percentile highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};
use rebalance_core::TRADING_DAYS_PER_YEAR;
use rebalance_core::model::MonteCarloReport;

use super::{downsample, padded_bounds};
use crate::util::format::format_compact_currency;

/// Path index `i` holds the value after trading day `i + 1`; convert to years.
fn in_years(points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    let per_year = TRADING_DAYS_PER_YEAR as f64;
    points
        .into_iter()
        .map(|(x, y)| ((x + 1.0) / per_year, y))
        .collect()
}

/// Line chart of the first `sample_count` paths in gray, the per-day
/// median in blue and the per-day 5th percentile in red.
pub fn render_paths_chart(
    frame: &mut Frame,
    area: Rect,
    report: &MonteCarloReport,
    sample_count: usize,
) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Monte Carlo: {} Simulations ",
        report.paths.num_paths()
    ));

    let samples = report.paths.sample_paths(sample_count);
    let drawn = samples
        .iter()
        .flatten()
        .chain(&report.median_path)
        .chain(&report.p5_path);
    let Some((_, y_max)) = padded_bounds(drawn) else {
        let msg = Paragraph::new("No simulated paths")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(msg, area);
        return;
    };

    let max_points = (area.width as usize).saturating_sub(12).max(2);
    let sample_data: Vec<Vec<(f64, f64)>> = samples
        .iter()
        .map(|path| in_years(downsample(path, max_points)))
        .collect();
    let median_data = in_years(downsample(&report.median_path, max_points * 2));
    let p5_data = in_years(downsample(&report.p5_path, max_points * 2));

    // Highlighted series go last so they draw over the samples
    let mut datasets: Vec<Dataset> = sample_data
        .iter()
        .map(|points| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(points)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .name("Median")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&median_data),
    );
    datasets.push(
        Dataset::default()
            .name("5th Percentile")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&p5_data),
    );

    let years = report.paths.days() as f64 / TRADING_DAYS_PER_YEAR as f64;
    let x_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", years / 2.0)),
        Span::raw(format!("{years:.0}")),
    ];
    let y_labels = vec![
        Span::raw(format_compact_currency(0.0)),
        Span::raw(format_compact_currency(y_max / 2.0)),
        Span::raw(format_compact_currency(y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopLeft))
        .x_axis(
            Axis::default()
                .title("Years".dark_gray())
                .bounds([0.0, years.max(f64::EPSILON)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Portfolio Value".dark_gray())
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
