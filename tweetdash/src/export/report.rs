//! Dashboard report: every enabled view, computed once, serializable.
//!
//! ```json
//! {
//!   "source": "Tweets.csv",
//!   "total_records": 14640,
//!   "sentiment_counts": [{"label": "negative", "count": 9178}, ...],
//!   "word_cloud": {"sentiment": "negative", "words": [...]},
//!   "histogram": {"bins": [...], "width": 5, "total": 14640},
//!   "raw_preview": {"headers": [...], "rows": [[...]]}
//! }
//! ```

// Bar widths intentionally use precision-losing casts
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use log::debug;
use serde::Serialize;
use std::io::Write;

use crate::analysis::word_cloud::default_stopwords;
use crate::analysis::{
    counts_by_sentiment, length_histogram, with_lengths, word_frequencies, word_pool,
    LengthHistogram, SentimentCount, WordFrequency,
};
use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::domain::ExportError;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Serialize)]
pub struct WordCloudReport {
    pub sentiment: String,
    /// Characters in the word pool (0 when no tweet matched)
    pub pool_chars: usize,
    pub words: Vec<WordFrequency>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RawPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Computed views for one dataset. Disabled views are `None` and omitted
/// from the JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub source: String,
    pub total_records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_counts: Option<Vec<SentimentCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_cloud: Option<WordCloudReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<LengthHistogram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_preview: Option<RawPreview>,
}

impl DashboardReport {
    /// Compute the views enabled in `config`. With no view enabled, all of
    /// them are included.
    #[must_use]
    pub fn build(dataset: &Dataset, config: &DashboardConfig) -> Self {
        let all = !(config.show_sentiment_count
            || config.show_word_cloud
            || config.show_histogram
            || config.show_raw_data);

        let sentiment_counts =
            (all || config.show_sentiment_count).then(|| counts_by_sentiment(dataset));

        let word_cloud = if all || config.show_word_cloud {
            config.resolve_sentiment(&dataset.sentiment_labels()).map(|sentiment| {
                let pool = word_pool(dataset, &sentiment);
                let words = word_frequencies(&pool, default_stopwords(), config.word_limit);
                WordCloudReport { sentiment, pool_chars: pool.chars().count(), words }
            })
        } else {
            None
        };

        let histogram = (all || config.show_histogram)
            .then(|| length_histogram(&with_lengths(dataset), config.bin_count));

        let raw_preview = (all || config.show_raw_data).then(|| RawPreview {
            headers: dataset.headers.clone(),
            rows: dataset.head(config.preview_rows).iter().map(|r| r.fields.clone()).collect(),
        });

        debug!("Built report for {} records", dataset.len());

        Self {
            source: config.data_path.display().to_string(),
            total_records: dataset.len(),
            sentiment_counts,
            word_cloud,
            histogram,
            raw_preview,
        }
    }

    /// Write the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the report as plain text, one section per view.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub fn write_text<W: Write>(&self, mut w: W) -> Result<(), ExportError> {
        writeln!(w, "Sentiment Analysis of Tweets about US Airlines")?;
        writeln!(w, "source: {} ({} tweets)", self.source, self.total_records)?;

        if let Some(counts) = &self.sentiment_counts {
            writeln!(w, "\nNumber of Tweets by Sentiment")?;
            let top = counts.first().map_or(0, |c| c.count);
            for c in counts {
                writeln!(
                    w,
                    "  {:<12} {:>7}  {:>5.1}%  {}",
                    c.label,
                    c.count,
                    c.share(self.total_records),
                    text_bar(c.count, top)
                )?;
            }
        }

        if let Some(cloud) = &self.word_cloud {
            writeln!(w, "\nWord Cloud for '{}'", cloud.sentiment)?;
            if cloud.words.is_empty() {
                writeln!(w, "  (no words)")?;
            }
            for word in &cloud.words {
                writeln!(w, "  {:<20} {:>6}", word.word, word.count)?;
            }
        }

        if let Some(hist) = &self.histogram {
            writeln!(w, "\nHistogram of Tweet Lengths ({} chars per bin)", hist.width)?;
            let top = hist.max_count();
            for bin in &hist.bins {
                writeln!(
                    w,
                    "  {:>4}-{:<4} {:>6}  {}",
                    bin.start,
                    bin.end - 1,
                    bin.count,
                    text_bar(bin.count, top)
                )?;
            }
        }

        if let Some(preview) = &self.raw_preview {
            writeln!(w, "\nRaw Data")?;
            writeln!(w, "  {}", preview.headers.join(" | "))?;
            for row in &preview.rows {
                writeln!(w, "  {}", row.join(" | "))?;
            }
        }

        w.flush()?;
        Ok(())
    }
}

/// Horizontal bar scaled so `top` fills `BAR_WIDTH`
fn text_bar(value: usize, top: usize) -> String {
    if top == 0 {
        return String::new();
    }
    let filled = ((value as f64 / top as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_pairs([
            ("positive", "good flight"),
            ("negative", "bad delay"),
            ("positive", "great crew"),
        ])
    }

    #[test]
    fn test_no_flags_includes_every_view() {
        let report = DashboardReport::build(&sample(), &DashboardConfig::default());
        assert_eq!(report.total_records, 3);
        assert!(report.sentiment_counts.is_some());
        assert!(report.histogram.is_some());
        assert!(report.raw_preview.is_some());

        let cloud = report.word_cloud.unwrap();
        assert_eq!(cloud.sentiment, "positive");
        assert_eq!(cloud.pool_chars, "good flight great crew".len());
        assert_eq!(cloud.words.len(), 4);
    }

    #[test]
    fn test_only_enabled_views() {
        let config = DashboardConfig { show_histogram: true, ..Default::default() };
        let report = DashboardReport::build(&sample(), &config);
        assert!(report.histogram.is_some());
        assert!(report.sentiment_counts.is_none());
        assert!(report.word_cloud.is_none());
        assert!(report.raw_preview.is_none());

        let hist = report.histogram.unwrap();
        let lengths = with_lengths(&sample());
        assert_eq!(hist.total, lengths.len());
        let shortest = lengths.records.iter().filter_map(|r| r.tweet_length).min();
        assert_eq!(hist.bins.first().map(|b| b.start), shortest);
    }

    #[test]
    fn test_unknown_sentiment_gives_empty_cloud() {
        let config = DashboardConfig {
            show_word_cloud: true,
            sentiment: Some("neutral".into()),
            ..Default::default()
        };
        let cloud = DashboardReport::build(&sample(), &config).word_cloud.unwrap();
        assert_eq!(cloud.pool_chars, 0);
        assert!(cloud.words.is_empty());
    }

    #[test]
    fn test_json_skips_disabled_views() {
        let config = DashboardConfig { show_sentiment_count: true, ..Default::default() };
        let mut buffer = Vec::new();
        DashboardReport::build(&sample(), &config).write_json(&mut buffer).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json["sentiment_counts"][0]["label"], "positive");
        assert_eq!(json["sentiment_counts"][0]["count"], 2);
        assert!(json.get("histogram").is_none());
    }

    #[test]
    fn test_text_report_sections() {
        let mut buffer = Vec::new();
        DashboardReport::build(&sample(), &DashboardConfig::default())
            .write_text(&mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Number of Tweets by Sentiment"));
        assert!(text.contains("Word Cloud for 'positive'"));
        assert!(text.contains("Histogram of Tweet Lengths"));
        assert!(text.contains("airline_sentiment | text"));
    }

    #[test]
    fn test_text_bar_scaling() {
        assert_eq!(text_bar(5, 0), "");
        assert_eq!(text_bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(text_bar(5, 10).chars().count(), BAR_WIDTH / 2);
    }
}
