use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rebalance_core::model::{BacktestReport, MonteCarloReport};

use crate::components::charts::{render_equity_chart, render_paths_chart, render_terminal_histogram};
use crate::components::tab_bar::render_tab_bar;

/// One full-screen chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    Backtest,
    Paths,
    Histogram,
}

impl ChartView {
    pub fn title(self) -> &'static str {
        match self {
            ChartView::Backtest => "Backtest",
            ChartView::Paths => "Simulated Paths",
            ChartView::Histogram => "Final Values",
        }
    }
}

/// Full-screen viewer over whichever results were computed
pub struct App {
    backtest: Option<BacktestReport>,
    monte_carlo: Option<MonteCarloReport>,
    chart_paths: usize,
    views: Vec<ChartView>,
    active: usize,
    exit: bool,
}

impl App {
    pub fn new(
        backtest: Option<BacktestReport>,
        monte_carlo: Option<MonteCarloReport>,
        chart_paths: usize,
    ) -> Self {
        let mut views = Vec::new();
        if backtest.is_some() {
            views.push(ChartView::Backtest);
        }
        if monte_carlo.is_some() {
            views.extend([ChartView::Paths, ChartView::Histogram]);
        }
        Self {
            backtest,
            monte_carlo,
            chart_paths,
            views,
            active: 0,
            exit: false,
        }
    }

    pub fn has_views(&self) -> bool {
        !self.views.is_empty()
    }

    pub fn active_view(&self) -> Option<ChartView> {
        self.views.get(self.active).copied()
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// runs the viewer until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::debug!(views = self.views.len(), "chart viewer started");
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Chart
                Constraint::Length(1), // Key help
            ])
            .split(frame.area());

        let titles: Vec<&str> = self.views.iter().map(|v| v.title()).collect();
        render_tab_bar(frame, chunks[0], &titles, self.active);
        self.render_active_view(frame, chunks[1]);

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(" next view  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]);
        frame.render_widget(Paragraph::new(help), chunks[2]);
    }

    fn render_active_view(&self, frame: &mut Frame, area: Rect) {
        match (self.active_view(), &self.backtest, &self.monte_carlo) {
            (Some(ChartView::Backtest), Some(report), _) => {
                render_equity_chart(frame, area, report)
            }
            (Some(ChartView::Paths), _, Some(report)) => {
                render_paths_chart(frame, area, report, self.chart_paths)
            }
            (Some(ChartView::Histogram), _, Some(report)) => render_terminal_histogram(
                frame,
                area,
                &report.histogram,
                report.summary.initial,
                report.summary.median,
            ),
            _ => frame.render_widget(Paragraph::new("Nothing to show"), area),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let count = self.views.len().max(1);
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true
            }
            KeyCode::Tab | KeyCode::Right => self.active = (self.active + 1) % count,
            KeyCode::BackTab | KeyCode::Left => self.active = (self.active + count - 1) % count,
            KeyCode::Char(c) => {
                if let Some(idx) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1))
                    && idx < self.views.len()
                {
                    self.active = idx;
                }
            }
            _ => {}
        }
    }
}
