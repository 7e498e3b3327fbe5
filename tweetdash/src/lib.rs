//! # tweetdash - Sentiment Dashboard for Airline Tweets
//!
//! tweetdash loads a CSV of tweets about US airlines and shows three optional
//! views in a terminal dashboard: tweets per sentiment, a word cloud for one
//! sentiment, and a histogram of tweet lengths.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  Tweets.csv  │────▶│  DatasetLoader   │────▶│ Arc<Dataset> │
//! └──────────────┘     │   (load once)    │     └──────┬───────┘
//!                      └──────────────────┘            │
//!                         ┌────────────────────────────┤
//!                         ▼                            ▼
//!                 ┌──────────────┐             ┌──────────────┐
//!                 │   Analysis   │────────────▶│ TUI / Report │
//!                 │ (pure views) │             │ (per frame)  │
//!                 └──────────────┘             └──────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`dataset`]: typed tweet records, CSV parsing, memoized loader
//! - [`analysis`]: sentiment counts, word pool and word frequencies,
//!   tweet lengths and histogram binning
//! - [`tui`]: interactive dashboard (ratatui)
//! - [`export`]: headless text and JSON reports
//! - [`cli`] / [`config`]: command-line arguments and dashboard settings
//! - [`domain`]: structured errors
//!
//! ## Typical Usage
//!
//! ```bash
//! # Interactive dashboard over ./Tweets.csv
//! tweetdash
//!
//! # Print every view without a TUI
//! tweetdash data/Tweets.csv --headless
//!
//! # Write the views as JSON
//! tweetdash --export report.json
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod export;
pub mod tui;
