//! Sentiment count panel - one colored bar per label.

// Bar sizing intentionally uses lossy casts
#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::theme::{sentiment_color, INFO_DIM, PRIMARY, TEXT};
use crate::analysis::{counts_by_sentiment, SentimentCount};
use crate::dataset::Dataset;

const BAR_GAP: u16 = 2;
const MIN_BAR_WIDTH: u16 = 3;
const MAX_BAR_WIDTH: u16 = 24;

/// Bar chart of tweets per sentiment, most frequent first.
pub struct SentimentChart {
    counts: Vec<SentimentCount>,
    total: usize,
}

impl SentimentChart {
    pub fn new(dataset: &Dataset) -> Self {
        Self { counts: counts_by_sentiment(dataset), total: dataset.len() }
    }

    /// Bar width that spreads `bars` across `inner_width` columns
    fn bar_width(inner_width: u16, bars: usize) -> u16 {
        let bars = u16::try_from(bars.max(1)).unwrap_or(u16::MAX);
        (inner_width / bars).saturating_sub(BAR_GAP).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Number of Tweets by Sentiment ({} tweets)", self.total))
            .border_style(Style::default().fg(PRIMARY));

        if self.counts.is_empty() {
            let empty = Line::styled("No tweets loaded", Style::default().fg(INFO_DIM));
            f.render_widget(Paragraph::new(empty).block(block), area);
            return;
        }

        let bars: Vec<Bar> = self
            .counts
            .iter()
            .enumerate()
            .map(|(idx, c)| {
                let color = sentiment_color(&c.label, idx);
                Bar::default()
                    .label(Line::from(c.label.clone()))
                    .value(c.count as u64)
                    .text_value(format!("{} ({:.0}%)", c.count, c.share(self.total)))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(TEXT).bg(color).add_modifier(Modifier::BOLD))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(Self::bar_width(area.width.saturating_sub(2), bars.len()))
            .bar_gap(BAR_GAP);

        f.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_bounds() {
        assert_eq!(SentimentChart::bar_width(200, 1), MAX_BAR_WIDTH);
        assert_eq!(SentimentChart::bar_width(10, 5), MIN_BAR_WIDTH);
        assert_eq!(SentimentChart::bar_width(60, 3), 18);
        assert_eq!(SentimentChart::bar_width(60, 0), MAX_BAR_WIDTH);
    }
}
