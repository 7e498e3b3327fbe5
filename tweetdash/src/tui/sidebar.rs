//! Sidebar - visualization checkboxes, sentiment selector and dataset summary.
//!
//! ```text
//! [ VISUALIZATION ]
//! ▶ [x] Sentiment Count    1
//!   [ ] Word Cloud         2
//!   [ ] Length Histogram   3
//!   [ ] Raw Data           r
//!
//!   Sentiment  ◀ negative ▶
//!
//!   Tweets   14640
//!   negative |||||||   63%
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

use super::theme::{gauge_bar, sentiment_color, ACCENT, INFO_DIM, PRIMARY, TEXT};
use crate::analysis::{counts_by_sentiment, SentimentCount};
use crate::config::DashboardConfig;
use crate::dataset::Dataset;

/// A toggleable dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    SentimentCount,
    WordCloud,
    Histogram,
    RawData,
}

impl Panel {
    /// Sidebar order
    pub const ALL: [Panel; 4] =
        [Panel::SentimentCount, Panel::WordCloud, Panel::Histogram, Panel::RawData];

    /// Checkbox label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Panel::SentimentCount => "Sentiment Count",
            Panel::WordCloud => "Word Cloud",
            Panel::Histogram => "Length Histogram",
            Panel::RawData => "Raw Data",
        }
    }

    /// Direct toggle key
    #[must_use]
    pub fn hotkey(self) -> char {
        match self {
            Panel::SentimentCount => '1',
            Panel::WordCloud => '2',
            Panel::Histogram => '3',
            Panel::RawData => 'r',
        }
    }

    #[must_use]
    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.hotkey() == key.to_ascii_lowercase())
    }
}

/// Checkbox state for every panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PanelToggles {
    pub sentiment_count: bool,
    pub word_cloud: bool,
    pub histogram: bool,
    pub raw_data: bool,
}

impl PanelToggles {
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            sentiment_count: config.show_sentiment_count,
            word_cloud: config.show_word_cloud,
            histogram: config.show_histogram,
            raw_data: config.show_raw_data,
        }
    }

    #[must_use]
    pub fn is_enabled(&self, panel: Panel) -> bool {
        match panel {
            Panel::SentimentCount => self.sentiment_count,
            Panel::WordCloud => self.word_cloud,
            Panel::Histogram => self.histogram,
            Panel::RawData => self.raw_data,
        }
    }

    pub fn toggle(&mut self, panel: Panel) {
        let flag = match panel {
            Panel::SentimentCount => &mut self.sentiment_count,
            Panel::WordCloud => &mut self.word_cloud,
            Panel::Histogram => &mut self.histogram,
            Panel::RawData => &mut self.raw_data,
        };
        *flag = !*flag;
    }

    /// Enabled panels in display order (raw data preview first)
    #[must_use]
    pub fn enabled(&self) -> Vec<Panel> {
        [Panel::RawData, Panel::SentimentCount, Panel::WordCloud, Panel::Histogram]
            .into_iter()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }
}

/// What the sidebar needs from the app to draw one frame
pub struct SidebarState<'a> {
    pub toggles: PanelToggles,
    pub cursor: usize,
    pub sentiment: Option<&'a str>,
}

/// Sidebar panel. Holds the dataset summary, computed once per frame.
pub struct Sidebar {
    total: usize,
    columns: usize,
    counts: Vec<SentimentCount>,
}

impl Sidebar {
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            total: dataset.len(),
            columns: dataset.headers.len(),
            counts: counts_by_sentiment(dataset),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, state: &SidebarState<'_>) {
        let mut lines = vec![Line::from(Span::styled(
            " Visualization Selector",
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ))];

        for (idx, panel) in Panel::ALL.into_iter().enumerate() {
            let is_cursor = idx == state.cursor;
            let checked = state.toggles.is_enabled(panel);

            let cursor = if is_cursor { "▶ " } else { "  " };
            let checkbox = if checked { "[x] " } else { "[ ] " };
            let style = if is_cursor {
                Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
            } else if checked {
                Style::default().fg(PRIMARY)
            } else {
                Style::default().fg(INFO_DIM)
            };

            lines.push(Line::from(vec![
                Span::styled(cursor, Style::default().fg(ACCENT)),
                Span::styled(format!("{checkbox}{:<17}", panel.label()), style),
                Span::styled(format!(" {}", panel.hotkey()), Style::default().fg(INFO_DIM)),
            ]));
        }

        // The selector only matters while the word cloud is on
        if state.toggles.word_cloud {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Choose a Sentiment",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )));
            let label = state.sentiment.unwrap_or("---");
            lines.push(Line::from(vec![
                Span::styled("  ◀ ", Style::default().fg(ACCENT)),
                Span::styled(
                    label.to_string(),
                    Style::default().fg(sentiment_color(label, 0)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", Style::default().fg(ACCENT)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Dataset",
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled("  Tweets  ", Style::default().fg(INFO_DIM)),
            Span::styled(self.total.to_string(), Style::default().fg(TEXT)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Columns ", Style::default().fg(INFO_DIM)),
            Span::styled(self.columns.to_string(), Style::default().fg(TEXT)),
        ]));

        for (idx, count) in self.counts.iter().enumerate() {
            let share = count.share(self.total);
            let color = sentiment_color(&count.label, idx);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<9}", truncate(&count.label, 9)),
                    Style::default().fg(color),
                ),
                Span::styled(gauge_bar(share, 8), Style::default().fg(color)),
                Span::styled(format!(" {share:>3.0}%"), Style::default().fg(color)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .title("[ DASHBOARD ]")
                .border_style(Style::default().fg(PRIMARY)),
        );

        f.render_widget(paragraph, area);
    }
}

/// Cut `s` to at most `max` characters
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
