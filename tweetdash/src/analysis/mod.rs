//! View computations over the tweet dataset
//!
//! This module contains pure functions that turn a [`Dataset`](crate::dataset::Dataset)
//! into the structures each dashboard panel renders, separated from the TUI
//! presentation layer. Nothing here is cached: every call recomputes from the
//! shared table.

pub mod sentiment;
pub mod tweet_length;
pub mod word_cloud;

pub use sentiment::{counts_by_sentiment, SentimentCount};
pub use tweet_length::{length_histogram, with_lengths, HistogramBin, LengthHistogram};
pub use word_cloud::{word_frequencies, word_pool, WordFrequency, STOPWORDS};
