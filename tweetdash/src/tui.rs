//! # Terminal User Interface (TUI)
//!
//! Interactive dashboard using `ratatui`. The left sidebar holds the
//! visualization checkboxes, the sentiment selector and a dataset summary;
//! the right side stacks one panel per enabled view.
//!
//! Every frame recomputes the enabled views from the shared dataset, so the
//! panels always reflect the current checkbox and selector state.
//!
//! ## View Modes
//!
//! - **Dashboard** - sidebar + enabled panels (default)
//! - **Help** - keyboard shortcuts overlay
//!
//! ## Sub-Modules
//!
//! - `sidebar` - checkboxes, selector, dataset summary
//! - `sentiment_chart` - tweets per sentiment bar chart
//! - `word_cloud` - ranked words for the selected sentiment
//! - `histogram` - tweet length distribution
//! - `raw_data` - first rows of the table
//! - `layout` - responsive breakpoints
//! - `theme` - color scheme

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod histogram;
pub mod layout;
mod raw_data;
pub mod sidebar;
mod sentiment_chart;
mod theme;
mod word_cloud;

use histogram::HistogramPanel;
use layout::compute_layout;
use raw_data::render_raw_data;
use sentiment_chart::SentimentChart;
use sidebar::{Panel, PanelToggles, Sidebar, SidebarState};
use theme::{ACCENT, BACKGROUND, INFO_DIM, PRIMARY, TEXT};
use word_cloud::WordCloudPanel;

use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::domain::TuiError;

// =============================================================================
// STYLE CONSTANTS
// =============================================================================

const STYLE_HEADING: Style = Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD);
const STYLE_LABEL: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
const STYLE_DIM: Style = Style::new().fg(INFO_DIM);
const STYLE_KEY: Style = Style::new().fg(ACCENT);
const STYLE_TEXT: Style = Style::new().fg(TEXT);

/// Input poll interval; the dashboard redraws at most this often
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// =============================================================================
// VIEW MODES
// =============================================================================

/// Current view mode determines what's displayed and how keys are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    /// Sidebar and enabled panels
    Dashboard,
    /// Help overlay with keyboard shortcuts
    Help,
}

// =============================================================================
// APP
// =============================================================================

/// Dashboard application state.
///
/// Holds the loaded dataset and the UI state (checkboxes, selector, cursor).
/// Use `App::new()` to create and `App::run()` to start.
pub struct App {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
    /// Distinct sentiment labels, first-seen order
    labels: Vec<String>,

    // UI state
    toggles: PanelToggles,
    sentiment: Option<String>,
    sidebar_cursor: usize,
    view_mode: ViewMode,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        let labels = dataset.sentiment_labels();
        let sentiment = config.resolve_sentiment(&labels);
        let toggles = PanelToggles::from_config(&config);

        Self {
            dataset,
            config,
            labels,
            toggles,
            sentiment,
            sidebar_cursor: 0,
            view_mode: ViewMode::Dashboard,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn toggles(&self) -> PanelToggles {
        self.toggles
    }

    #[must_use]
    pub fn sentiment(&self) -> Option<&str> {
        self.sentiment.as_deref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Step the sentiment selector forward or back, wrapping around
    fn cycle_sentiment(&mut self, forward: bool) {
        if self.labels.is_empty() {
            return;
        }
        let len = self.labels.len();
        let current =
            self.sentiment.as_ref().and_then(|s| self.labels.iter().position(|l| l == s));
        let next = match current {
            Some(pos) if forward => (pos + 1) % len,
            Some(pos) => (pos + len - 1) % len,
            // A label that isn't in the data: jump back onto the real labels
            None if forward => 0,
            None => len - 1,
        };
        self.sentiment = Some(self.labels[next].clone());
        debug!("Selected sentiment {:?}", self.sentiment);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.view_mode {
            ViewMode::Dashboard => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up => self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1),
                KeyCode::Down => {
                    if self.sidebar_cursor + 1 < Panel::ALL.len() {
                        self.sidebar_cursor += 1;
                    }
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.toggles.toggle(Panel::ALL[self.sidebar_cursor]);
                }
                KeyCode::Left => self.cycle_sentiment(false),
                KeyCode::Right | KeyCode::Tab => self.cycle_sentiment(true),
                KeyCode::Char('?') => self.view_mode = ViewMode::Help,
                KeyCode::Char(c) => {
                    if let Some(panel) = Panel::from_hotkey(c) {
                        self.toggles.toggle(panel);
                    }
                }
                _ => {}
            },
            ViewMode::Help => {
                // Any key closes help
                self.view_mode = ViewMode::Dashboard;
            }
        }
    }

    /// Draw one frame
    pub fn draw(&self, f: &mut Frame) {
        let layout = compute_layout(f.area().width, f.area().height);

        let main_area = if layout.show_chrome {
            let outer = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Header
                    Constraint::Min(0),    // Sidebar + panels
                    Constraint::Length(3), // Status bar
                ])
                .split(f.area());
            self.render_header(f, outer[0]);
            self.render_status_bar(f, outer[2]);
            outer[1]
        } else {
            f.area()
        };

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(layout.col_constraints())
            .split(main_area);

        if layout.show_sidebar {
            let state = SidebarState {
                toggles: self.toggles,
                cursor: self.sidebar_cursor,
                sentiment: self.sentiment.as_deref(),
            };
            Sidebar::new(&self.dataset).render(f, cols[0], &state);
        }

        self.render_panels(f, cols[1]);

        if self.view_mode == ViewMode::Help {
            render_help_overlay(f, f.area());
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled("Sentiment Analysis of Tweets about US Airlines", STYLE_HEADING),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(self.config.data_path.display().to_string(), STYLE_TEXT),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(format!("{} tweets", self.dataset.len()), STYLE_LABEL),
        ])])
        .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(PRIMARY)));
        f.render_widget(header, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_line = match self.view_mode {
            ViewMode::Dashboard => {
                let enabled = self.toggles.enabled().len();
                let mode = if enabled == 0 {
                    Span::styled("[Idle]", STYLE_DIM)
                } else {
                    Span::styled(format!("[{enabled} views]"), Style::new().fg(PRIMARY))
                };
                Line::from(vec![
                    Span::styled("Q", STYLE_KEY),
                    Span::styled(":Quit ", STYLE_DIM),
                    Span::styled("Space", STYLE_KEY),
                    Span::styled(":Toggle ", STYLE_DIM),
                    Span::styled("1 2 3 R", STYLE_KEY),
                    Span::styled(":Views ", STYLE_DIM),
                    Span::styled("←→", STYLE_KEY),
                    Span::styled(":Sentiment ", STYLE_DIM),
                    Span::styled("?", STYLE_KEY),
                    Span::styled(":Help ", STYLE_DIM),
                    mode,
                ])
            }
            ViewMode::Help => Line::from(vec![
                Span::styled("Any key", STYLE_KEY),
                Span::styled(":Close ", STYLE_DIM),
                Span::styled("[Help]", Style::new().fg(PRIMARY)),
            ]),
        };

        let status = Paragraph::new(vec![status_line])
            .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(PRIMARY)));
        f.render_widget(status, area);
    }

    /// Stack the enabled panels vertically, each recomputed from the dataset
    fn render_panels(&self, f: &mut Frame, area: Rect) {
        let panels = self.toggles.enabled();

        if panels.is_empty() {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("  No visualization selected", STYLE_HEADING)),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Toggle a view in the sidebar with ", STYLE_DIM),
                    Span::styled("Space", STYLE_KEY),
                    Span::styled(" or press ", STYLE_DIM),
                    Span::styled("1", STYLE_KEY),
                    Span::styled(" / ", STYLE_DIM),
                    Span::styled("2", STYLE_KEY),
                    Span::styled(" / ", STYLE_DIM),
                    Span::styled("3", STYLE_KEY),
                    Span::styled(" / ", STYLE_DIM),
                    Span::styled("R", STYLE_KEY),
                ]),
            ])
            .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(INFO_DIM)));
            f.render_widget(hint, area);
            return;
        }

        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(panels.iter().map(|_| Constraint::Fill(1)))
            .split(area);

        for (panel, panel_area) in panels.iter().zip(areas.iter()) {
            match panel {
                Panel::RawData => {
                    render_raw_data(f, *panel_area, &self.dataset, self.config.preview_rows);
                }
                Panel::SentimentCount => SentimentChart::new(&self.dataset).render(f, *panel_area),
                Panel::WordCloud => WordCloudPanel::new(
                    &self.dataset,
                    self.sentiment.as_deref(),
                    self.config.word_limit,
                )
                .render(f, *panel_area),
                Panel::Histogram => {
                    HistogramPanel::new(&self.dataset, self.config.bin_count)
                        .render(f, *panel_area);
                }
            }
        }
    }

    /// Run the TUI event loop
    ///
    /// # Errors
    /// Returns an error if terminal setup or rendering fails
    pub fn run(mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().map_err(TuiError::from).context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Cleanup terminal, even if the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal
                .draw(|f| self.draw(f))
                .map_err(|e| TuiError::TerminalError(e.to_string()))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}

// =============================================================================
// OVERLAY RENDERERS
// =============================================================================

/// Render the help overlay explaining the dashboard and its keys
fn render_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 70, 22);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  What You're Looking At", STYLE_HEADING)),
        Line::from(Span::styled(
            "  Tweets about US airlines, labelled positive, neutral or negative.",
            STYLE_DIM,
        )),
        Line::from(""),
        Line::from(Span::styled("  Views", STYLE_HEADING)),
        Line::from(vec![
            Span::styled("  Sentiment  ", STYLE_LABEL),
            Span::styled("Tweets per label, most frequent first.", STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("  Word Cloud ", STYLE_LABEL),
            Span::styled("Most used words for the chosen sentiment.", STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("  Histogram  ", STYLE_LABEL),
            Span::styled("How long tweets are, in characters.", STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("  Raw Data   ", STYLE_LABEL),
            Span::styled("First rows of the file, every column.", STYLE_DIM),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Keys", STYLE_HEADING)),
        Line::from(vec![
            Span::styled("  ↑↓", STYLE_KEY),
            Span::styled(" Select   ", STYLE_TEXT),
            Span::styled("Space", STYLE_KEY),
            Span::styled(" Toggle   ", STYLE_TEXT),
            Span::styled("1 2 3 R", STYLE_KEY),
            Span::styled(" Views", STYLE_TEXT),
        ]),
        Line::from(vec![
            Span::styled("  ←→", STYLE_KEY),
            Span::styled(" Sentiment   ", STYLE_TEXT),
            Span::styled("Q", STYLE_KEY),
            Span::styled(" Quit", STYLE_TEXT),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", STYLE_DIM)),
    ];

    let help_widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::new().bg(BACKGROUND).fg(PRIMARY)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

/// Create a centered popup area with given width percentage and height in lines
fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height_lines), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}
