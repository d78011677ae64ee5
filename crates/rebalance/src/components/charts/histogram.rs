//! Terminal-value histogram drawn with block characters.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rebalance_core::histogram::Histogram;

use crate::util::format::format_compact_currency;

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

const MARKER: &str = "▲";

/// Bar heights in eighths of a row, the tallest bar filling `height` rows.
fn bar_heights(counts: &[usize], height: usize) -> Vec<usize> {
    let max_count = counts.iter().copied().max().unwrap_or(0);
    if max_count == 0 {
        return vec![0; counts.len()];
    }
    let height_units = (height * 8) as f64;
    counts
        .iter()
        .map(|&c| ((c as f64 / max_count as f64) * height_units).round() as usize)
        .collect()
}

/// Glyph for a bar of `bar_h` eighths in the row whose bottom is `row_base`.
fn bar_glyph(bar_h: usize, row_base: usize) -> &'static str {
    if bar_h >= row_base + 8 {
        "█"
    } else if bar_h > row_base {
        BIN_CHARS[bar_h - row_base]
    } else {
        " "
    }
}

/// Render the terminal-value histogram with the initial investment and the
/// median marked under their bins.
pub fn render_terminal_histogram(
    frame: &mut Frame,
    area: Rect,
    hist: &Histogram,
    initial: f64,
    median: f64,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Distribution of Final Values ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bins = hist.counts.len();
    // Bars, then a marker row, an axis row and a legend row
    let height = inner.height.saturating_sub(3) as usize;
    if bins == 0 || height < 3 || (inner.width as usize) < bins {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }
    if hist.max_count() == 0 {
        let msg = Paragraph::new("No values in range").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    let col_width = inner.width as usize / bins;
    let x_offset = (inner.width as usize - bins * col_width) / 2;
    let heights = bar_heights(&hist.counts, height);
    let initial_bin = hist.bin_of(initial);
    let median_bin = hist.bin_of(median);

    let bin_color = |i: usize| {
        if Some(i) == median_bin {
            Color::Yellow
        } else if hist.bin_start(i) + hist.bin_width() <= initial {
            Color::Red // Entirely below the initial investment
        } else {
            Color::Cyan
        }
    };

    for row in 0..height {
        let row_base = (height - 1 - row) * 8;
        let mut spans = Vec::with_capacity(bins + 1);
        if x_offset > 0 {
            spans.push(Span::raw(" ".repeat(x_offset)));
        }
        for (i, &bar_h) in heights.iter().enumerate() {
            spans.push(Span::styled(
                bar_glyph(bar_h, row_base).repeat(col_width),
                Style::default().fg(bin_color(i)),
            ));
        }
        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    // Marker row
    let mut markers = vec![Span::raw(" ".repeat(x_offset))];
    for i in 0..bins {
        let marker = if Some(i) == median_bin {
            Span::styled(MARKER, Style::default().fg(Color::Yellow))
        } else if Some(i) == initial_bin {
            Span::styled(MARKER, Style::default().fg(Color::White))
        } else {
            Span::raw(" ")
        };
        markers.push(marker);
        markers.push(Span::raw(" ".repeat(col_width - 1)));
    }
    let marker_y = inner.y + height as u16;
    frame.render_widget(
        Paragraph::new(Line::from(markers)),
        Rect::new(inner.x, marker_y, inner.width, 1),
    );

    // Axis row
    let min_label = format_compact_currency(hist.min);
    let max_label = format_compact_currency(hist.max);
    let gap = (inner.width as usize).saturating_sub(min_label.len() + max_label.len());
    let axis = Line::from(vec![
        Span::styled(min_label, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(gap)),
        Span::styled(max_label, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(axis),
        Rect::new(inner.x, marker_y + 1, inner.width, 1),
    );

    // Legend row
    let mut legend = vec![
        Span::styled(
            format!("{MARKER} Initial {}", format_compact_currency(initial)),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{MARKER} Median {}", format_compact_currency(median)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if hist.clipped > 0 {
        legend.push(Span::styled(
            format!("   {} outside range", hist.clipped),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(legend)),
        Rect::new(inner.x, marker_y + 2, inner.width, 1),
    );
}
