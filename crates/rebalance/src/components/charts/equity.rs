//! Backtest equity curves.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};
use rebalance_core::model::{BacktestReport, EquityCurve};

use super::{downsample, padded_bounds};

const BENCHMARK_COLOR: Color = Color::Blue;
const PORTFOLIO_COLOR: Color = Color::LightGreen;

/// Line chart of the benchmark and the rebalanced portfolio over time.
pub fn render_equity_chart(frame: &mut Frame, area: Rect, report: &BacktestReport) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Historical Backtest ");

    let curves: [(&EquityCurve, Color); 2] = [
        (&report.benchmark.curve, BENCHMARK_COLOR),
        (&report.portfolio.curve, PORTFOLIO_COLOR),
    ];
    let bounds = padded_bounds(curves.iter().flat_map(|(c, _)| c.values.iter()));
    let (Some((y_min, y_max)), Some(last)) = (bounds, report.portfolio.curve.len().checked_sub(1))
    else {
        let msg = Paragraph::new("No backtest data")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(msg, area);
        return;
    };

    // Braille gives two points per cell
    let max_points = (area.width as usize).saturating_sub(12).max(2) * 2;
    let data: Vec<Vec<(f64, f64)>> = curves
        .iter()
        .map(|(curve, _)| downsample(&curve.values, max_points))
        .collect();

    let datasets = curves
        .iter()
        .zip(&data)
        .map(|((curve, color), points)| {
            Dataset::default()
                .name(curve.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let dates = &report.portfolio.curve.dates;
    let x_labels = vec![
        Span::raw(dates[0].to_string()),
        Span::raw(dates[last / 2].to_string()),
        Span::raw(dates[last].to_string()),
    ];
    let y_labels = vec![
        Span::raw(format!("{y_min:.2}")),
        Span::raw(format!("{:.2}", (y_min + y_max) / 2.0)),
        Span::raw(format!("{y_max:.2}")),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopLeft))
        .x_axis(
            Axis::default()
                .title("Date".dark_gray())
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Growth of $1".dark_gray())
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
