//! Word cloud panel.
//!
//! A terminal can't scale fonts, so word size is approximated with three
//! emphasis tiers driven by the word's weight:
//!
//! - weight > 0.66: UPPERCASE + bold
//! - weight > 0.33: bold
//! - otherwise: plain, dimmed
//!
//! Words keep their frequency order and wrap across the panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{sentiment_color, INFO_DIM, PALETTE, PRIMARY};
use crate::analysis::word_cloud::default_stopwords;
use crate::analysis::{word_frequencies, word_pool, WordFrequency};
use crate::dataset::Dataset;

/// Word cloud for one sentiment label
pub struct WordCloudPanel {
    sentiment: Option<String>,
    words: Vec<WordFrequency>,
}

impl WordCloudPanel {
    pub fn new(dataset: &Dataset, sentiment: Option<&str>, limit: usize) -> Self {
        let words = sentiment.map_or_else(Vec::new, |label| {
            word_frequencies(&word_pool(dataset, label), default_stopwords(), limit)
        });
        Self { sentiment: sentiment.map(str::to_string), words }
    }

    /// Styled span for one word; `idx` rotates the palette
    fn word_span(word: &WordFrequency, idx: usize) -> Span<'static> {
        let color = PALETTE[idx % PALETTE.len()];
        if word.weight > 0.66 {
            Span::styled(
                word.word.to_uppercase(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else if word.weight > 0.33 {
            Span::styled(word.word.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(word.word.clone(), Style::default().fg(color).add_modifier(Modifier::DIM))
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let label = self.sentiment.as_deref().unwrap_or("---");
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::raw("Word Cloud for "),
                Span::styled(label.to_string(), Style::default().fg(sentiment_color(label, 0))),
            ]))
            .border_style(Style::default().fg(PRIMARY));

        let line = if self.words.is_empty() {
            Line::styled("No words for this sentiment", Style::default().fg(INFO_DIM))
        } else {
            let mut spans = Vec::with_capacity(self.words.len() * 2);
            for (idx, word) in self.words.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Self::word_span(word, idx));
            }
            Line::from(spans)
        };

        let paragraph = Paragraph::new(line).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        let big = WordFrequency { word: "delay".into(), count: 10, weight: 1.0 };
        let mid = WordFrequency { word: "crew".into(), count: 5, weight: 0.5 };
        let small = WordFrequency { word: "seat".into(), count: 1, weight: 0.1 };

        assert_eq!(WordCloudPanel::word_span(&big, 0).content, "DELAY");
        assert!(WordCloudPanel::word_span(&mid, 0).style.add_modifier.contains(Modifier::BOLD));
        assert!(WordCloudPanel::word_span(&small, 0).style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_no_sentiment_means_no_words() {
        let ds = Dataset::from_pairs([("positive", "great crew")]);
        assert!(WordCloudPanel::new(&ds, None, 10).words.is_empty());
        assert_eq!(WordCloudPanel::new(&ds, Some("positive"), 10).words.len(), 2);
    }
}
