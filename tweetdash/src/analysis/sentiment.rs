//! Sentiment count aggregation.
//!
//! Groups records by `airline_sentiment` and ranks labels by frequency,
//! the input to the sentiment bar chart.
//!
//! ```text
//! SENTIMENT COUNT
//! ─────────────────────────────────
//!   negative   9178  ████████████
//!   neutral    3099  ████
//!   positive   2363  ███
//! ```

// Share calculations intentionally convert usize to f64
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;
use std::collections::HashMap;

use crate::dataset::Dataset;

/// Number of tweets carrying one sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub label: String,
    pub count: usize,
}

impl SentimentCount {
    /// Percentage of `total` (0.0 when total is zero)
    #[must_use]
    pub fn share(&self, total: usize) -> f64 {
        if total > 0 {
            (self.count as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Count records per sentiment label, most frequent first.
///
/// Labels with equal counts keep the order in which they first appear in the
/// dataset; callers should not rely on that order.
#[must_use]
pub fn counts_by_sentiment(dataset: &Dataset) -> Vec<SentimentCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SentimentCount> = Vec::new();

    for record in &dataset.records {
        let label = record.airline_sentiment.as_str();
        match index.get(label) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(SentimentCount { label: label.to_string(), count: 1 });
            }
        }
    }

    // Stable sort keeps first-seen order among ties
    counts.sort_by_key(|c| std::cmp::Reverse(c.count));
    counts
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
    fn test_counts_sorted_by_frequency() {
        let counts = counts_by_sentiment(&sample());
        assert_eq!(
            counts,
            vec![
                SentimentCount { label: "positive".into(), count: 2 },
                SentimentCount { label: "negative".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_counts_sum_to_dataset_length() {
        let ds = Dataset::from_pairs([
            ("negative", "a"),
            ("neutral", "b"),
            ("negative", "c"),
            ("positive", "d"),
            ("neutral", "e"),
            ("negative", "f"),
            ("positive", "g"),
        ]);
        let counts = counts_by_sentiment(&ds);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), ds.len());
        assert_eq!(counts[0].label, "negative");
        assert_eq!(counts[0].count, 3);
        // Tie between neutral and positive: only check membership
        let mut rest: Vec<_> = counts[1..].iter().map(|c| (c.label.as_str(), c.count)).collect();
        rest.sort_unstable();
        assert_eq!(rest, vec![("neutral", 2), ("positive", 2)]);
    }

    #[test]
    fn test_empty_dataset_yields_no_counts() {
        let ds = Dataset::from_pairs(Vec::<(String, String)>::new());
        assert!(counts_by_sentiment(&ds).is_empty());
    }

    #[test]
    fn test_share() {
        let count = SentimentCount { label: "positive".into(), count: 1 };
        assert!((count.share(4) - 25.0).abs() < f64::EPSILON);
        assert!(count.share(0).abs() < f64::EPSILON);
    }
}
