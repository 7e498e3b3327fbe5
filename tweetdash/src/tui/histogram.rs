//! Tweet length histogram panel.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::theme::{ACCENT, INFO_DIM, PALETTE, PRIMARY};
use crate::analysis::{length_histogram, with_lengths, LengthHistogram};
use crate::dataset::Dataset;

/// Histogram of tweet lengths, recomputed from the dataset on each frame.
pub struct HistogramPanel {
    histogram: LengthHistogram,
    bin_count: usize,
}

impl HistogramPanel {
    pub fn new(dataset: &Dataset, bin_count: usize) -> Self {
        let lengths = with_lengths(dataset);
        Self { histogram: length_histogram(&lengths, bin_count), bin_count }
    }

    /// Label every `step`-th bin so labels don't collide
    fn label_step(bar_width: u16) -> usize {
        match bar_width {
            0..=1 => 5,
            2..=3 => 2,
            _ => 1,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                "Distribution of Tweet Lengths ({} bins, {} chars each)",
                self.histogram.bins.len(),
                self.histogram.width
            ))
            .border_style(Style::default().fg(PRIMARY));

        if self.histogram.bins.is_empty() {
            let text = if self.bin_count == 0 { "No bins" } else { "No tweets loaded" };
            f.render_widget(
                Paragraph::new(Line::styled(text, Style::default().fg(INFO_DIM))).block(block),
                area,
            );
            return;
        }

        let inner_width = area.width.saturating_sub(2);
        let bins = u16::try_from(self.histogram.bins.len()).unwrap_or(u16::MAX);
        let bar_width = (inner_width / bins).saturating_sub(1).max(1);
        let step = Self::label_step(bar_width);

        let bars: Vec<Bar> = self
            .histogram
            .bins
            .iter()
            .enumerate()
            .map(|(idx, bin)| {
                let label = if idx % step == 0 { bin.start.to_string() } else { String::new() };
                Bar::default()
                    .label(Line::from(label))
                    .value(bin.count as u64)
                    .text_value(String::new())
                    .style(Style::default().fg(PALETTE[0]))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .label_style(Style::default().fg(ACCENT));

        f.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_step() {
        assert_eq!(HistogramPanel::label_step(1), 5);
        assert_eq!(HistogramPanel::label_step(3), 2);
        assert_eq!(HistogramPanel::label_step(6), 1);
    }
}
