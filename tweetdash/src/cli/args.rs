//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::dataset::DEFAULT_DATA_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "tweetdash",
    version,
    about = "Sentiment analysis dashboard for tweets about US airlines",
    after_help = "\
EXAMPLES:
    tweetdash                                   Open Tweets.csv in the dashboard
    tweetdash data/Tweets.csv --word-cloud      Start with the word cloud enabled
    tweetdash --headless --sentiment negative   Print all views to stdout
    tweetdash --export report.json              Write the views as JSON"
)]
pub struct Args {
    /// CSV file with `airline_sentiment` and `text` columns
    #[arg(value_name = "FILE", default_value = DEFAULT_DATA_PATH)]
    pub file: PathBuf,

    /// Start with the sentiment count chart enabled
    #[arg(long)]
    pub sentiment_count: bool,

    /// Start with the word cloud enabled
    #[arg(long)]
    pub word_cloud: bool,

    /// Start with the tweet length histogram enabled
    #[arg(long)]
    pub histogram: bool,

    /// Start with the raw data preview enabled
    #[arg(long)]
    pub raw: bool,

    /// Sentiment shown in the word cloud (defaults to the first label in the file)
    #[arg(long, value_name = "LABEL")]
    pub sentiment: Option<String>,

    /// Number of histogram bins
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u16).range(1..=500))]
    pub bins: u16,

    /// Rows shown in the raw data preview
    #[arg(long, default_value = "5")]
    pub preview_rows: usize,

    /// Maximum number of words in the word cloud
    #[arg(long, default_value = "60")]
    pub words: usize,

    /// Print every view to stdout instead of starting the TUI
    #[arg(long)]
    pub headless: bool,

    /// Write every view as JSON to FILE (no TUI)
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Whether the interactive dashboard should start
    #[must_use]
    pub fn interactive(&self) -> bool {
        !self.headless && self.export.is_none()
    }

    /// Dashboard settings derived from the command line
    #[must_use]
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            data_path: self.file.clone(),
            show_sentiment_count: self.sentiment_count,
            show_word_cloud: self.word_cloud,
            show_histogram: self.histogram,
            show_raw_data: self.raw,
            sentiment: self.sentiment.clone(),
            bin_count: usize::from(self.bins),
            preview_rows: self.preview_rows,
            word_limit: self.words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_dashboard() {
        let args = Args::try_parse_from(["tweetdash"]).unwrap();
        assert_eq!(args.file, PathBuf::from("Tweets.csv"));
        assert!(args.interactive());

        let config = args.dashboard_config();
        assert_eq!(config.bin_count, 30);
        assert_eq!(config.preview_rows, 5);
        assert!(!config.show_sentiment_count);
        assert!(!config.show_word_cloud);
        assert!(!config.show_histogram);
        assert!(!config.show_raw_data);
    }

    #[test]
    fn test_flags_and_export() {
        let args = Args::try_parse_from([
            "tweetdash",
            "data.csv",
            "--word-cloud",
            "--sentiment",
            "negative",
            "--bins",
            "12",
            "--export",
            "out.json",
        ])
        .unwrap();
        assert!(!args.interactive());

        let config = args.dashboard_config();
        assert_eq!(config.data_path, PathBuf::from("data.csv"));
        assert!(config.show_word_cloud);
        assert_eq!(config.sentiment.as_deref(), Some("negative"));
        assert_eq!(config.bin_count, 12);
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert!(Args::try_parse_from(["tweetdash", "--bins", "0"]).is_err());
    }
}
