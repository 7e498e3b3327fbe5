//! Tweet length column and histogram binning.
//!
//! Lengths are counted in Unicode scalar values, so an emoji or an accented
//! letter counts once regardless of its UTF-8 width.

use serde::Serialize;

use crate::dataset::{Dataset, LENGTH_COLUMN};

/// Default number of histogram bins
pub const DEFAULT_BIN_COUNT: usize = 30;

/// One half-open length interval `[start, end)` and the tweets falling in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub start: usize,
    pub end: usize,
    pub count: usize,
}

/// Equal-width histogram of tweet lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LengthHistogram {
    pub bins: Vec<HistogramBin>,
    /// Width of every bin in characters
    pub width: usize,
    pub total: usize,
}

impl LengthHistogram {
    /// Largest bin count, used to scale bars
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Character count of a tweet body
#[must_use]
pub fn tweet_length(text: &str) -> usize {
    text.chars().count()
}

/// Copy of `dataset` with a `tweet_length` value on every record.
///
/// The header gains a `tweet_length` column unless it already has one, so
/// applying this twice yields the same table.
#[must_use]
pub fn with_lengths(dataset: &Dataset) -> Dataset {
    let mut headers = dataset.headers.clone();
    let length_pos = dataset.column_position(LENGTH_COLUMN);
    if length_pos.is_none() {
        headers.push(LENGTH_COLUMN.to_string());
    }

    let records = dataset
        .records
        .iter()
        .map(|record| {
            let length = tweet_length(&record.text);
            let mut record = record.clone();
            match length_pos {
                Some(pos) => record.fields[pos] = length.to_string(),
                None => record.fields.push(length.to_string()),
            }
            record.tweet_length = Some(length);
            record
        })
        .collect();

    Dataset { headers, records }
}

/// Bucket the `tweet_length` column into at most `bin_count` equal-width bins.
///
/// Expects a table produced by [`with_lengths`]; a table with any record
/// lacking a length is run through it first. Bins start at the shortest
/// length and are `ceil(span / bin_count)` wide (at least 1), so the last bin
/// always contains the longest tweet. Empty datasets and a zero bin count
/// produce an empty histogram.
#[must_use]
pub fn length_histogram(dataset: &Dataset, bin_count: usize) -> LengthHistogram {
    if dataset.records.iter().any(|r| r.tweet_length.is_none()) {
        return length_histogram(&with_lengths(dataset), bin_count);
    }
    let lengths: Vec<usize> = dataset.records.iter().filter_map(|r| r.tweet_length).collect();

    let (Some(&min), Some(&max)) = (lengths.iter().min(), lengths.iter().max()) else {
        return LengthHistogram::default();
    };
    if bin_count == 0 {
        return LengthHistogram::default();
    }

    let span = max - min + 1;
    let width = span.div_ceil(bin_count).max(1);
    let used_bins = span.div_ceil(width);

    let mut bins: Vec<HistogramBin> = (0..used_bins)
        .map(|i| {
            let start = min + i * width;
            HistogramBin { start, end: start + width, count: 0 }
        })
        .collect();

    for length in &lengths {
        bins[(length - min) / width].count += 1;
    }

    LengthHistogram { bins, width, total: lengths.len() }
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
    fn test_with_lengths_counts_characters() {
        let ds = with_lengths(&sample());
        let lengths: Vec<_> = ds.records.iter().map(|r| r.tweet_length).collect();
        assert_eq!(lengths, vec![Some(11), Some(9), Some(10)]);
        assert_eq!(ds.headers.last().map(String::as_str), Some("tweet_length"));
        assert_eq!(ds.records[0].fields.last().map(String::as_str), Some("11"));
    }

    #[test]
    fn test_with_lengths_preserves_rows_and_source() {
        let source = sample();
        let ds = with_lengths(&source);
        assert_eq!(ds.len(), source.len());
        assert!(source.records.iter().all(|r| r.tweet_length.is_none()));
        for (derived, original) in ds.records.iter().zip(&source.records) {
            assert_eq!(derived.text, original.text);
            assert_eq!(derived.airline_sentiment, original.airline_sentiment);
        }
    }

    #[test]
    fn test_with_lengths_is_idempotent() {
        let once = with_lengths(&sample());
        let twice = with_lengths(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unicode_and_empty_lengths() {
        let ds = with_lengths(&Dataset::from_pairs([
            ("neutral", ""),
            ("positive", "caf\u{e9} \u{2708}\u{fe0f}"),
        ]));
        assert_eq!(ds.records[0].tweet_length, Some(0));
        // "café " is 5 chars, the airplane emoji is U+2708 + U+FE0F
        assert_eq!(ds.records[1].tweet_length, Some(7));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::from_pairs(Vec::<(String, String)>::new());
        assert!(with_lengths(&ds).is_empty());
        assert!(length_histogram(&ds, DEFAULT_BIN_COUNT).bins.is_empty());
    }

    #[test]
    fn test_histogram_bins_cover_all_rows() {
        let texts: Vec<String> = (1..=140).map(|n| "x".repeat(n)).collect();
        let ds = Dataset::from_pairs(texts.iter().map(|t| ("neutral", t.as_str())));
        let hist = length_histogram(&ds, DEFAULT_BIN_COUNT);

        assert!(hist.bins.len() <= DEFAULT_BIN_COUNT);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 140);
        assert_eq!(hist.total, 140);
        assert_eq!(hist.bins[0].start, 1);
        assert!(hist.bins.last().is_some_and(|b| b.end > 140));
        for pair in hist.bins.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_histogram_single_length() {
        let ds = Dataset::from_pairs([("neutral", "same"), ("positive", "also")]);
        let hist = length_histogram(&ds, 30);
        assert_eq!(hist.bins, vec![HistogramBin { start: 4, end: 5, count: 2 }]);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_histogram_bins_the_length_column() {
        let lengths = with_lengths(&sample());
        let hist = length_histogram(&lengths, DEFAULT_BIN_COUNT);
        assert_eq!(hist, length_histogram(&sample(), DEFAULT_BIN_COUNT));

        let column: Vec<usize> = lengths.records.iter().filter_map(|r| r.tweet_length).collect();
        assert_eq!(hist.total, column.len());
        for bin in &hist.bins {
            let in_bin = column.iter().filter(|&&l| l >= bin.start && l < bin.end).count();
            assert_eq!(bin.count, in_bin);
        }
    }

    #[test]
    fn test_histogram_uses_precomputed_lengths() {
        let mut lengths = with_lengths(&sample());
        for record in &mut lengths.records {
            record.tweet_length = Some(100);
        }
        let hist = length_histogram(&lengths, DEFAULT_BIN_COUNT);
        assert_eq!(hist.bins, vec![HistogramBin { start: 100, end: 101, count: 3 }]);
    }

    #[test]
    fn test_histogram_zero_bins() {
        assert!(length_histogram(&sample(), 0).bins.is_empty());
    }
}
