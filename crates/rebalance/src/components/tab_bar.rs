use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Numbered view titles with the active one highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, titles: &[&str], active: usize) {
    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = titles
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let content = format!("[{}] {}", idx + 1, title);
            if idx == active {
                Line::from(Span::styled(content, highlight))
            } else {
                Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
            }
        })
        .collect();

    let tabs = Tabs::new(lines)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(active)
        .highlight_style(highlight);

    frame.render_widget(tabs, area);
}
