//! Dashboard settings shared by the TUI and the headless report.

use std::path::PathBuf;

use crate::analysis::tweet_length::DEFAULT_BIN_COUNT;
use crate::analysis::word_cloud::DEFAULT_WORD_LIMIT;
use crate::dataset::DEFAULT_DATA_PATH;

/// Rows shown by the raw data preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Which views are enabled and how they are computed.
///
/// The `show_*` flags are the initial sidebar checkbox states; the TUI lets
/// the user flip them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub show_sentiment_count: bool,
    pub show_word_cloud: bool,
    pub show_histogram: bool,
    pub show_raw_data: bool,
    /// Word cloud sentiment; `None` picks the first label in the dataset
    pub sentiment: Option<String>,
    pub bin_count: usize,
    pub preview_rows: usize,
    pub word_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            show_sentiment_count: false,
            show_word_cloud: false,
            show_histogram: false,
            show_raw_data: false,
            sentiment: None,
            bin_count: DEFAULT_BIN_COUNT,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            word_limit: DEFAULT_WORD_LIMIT,
        }
    }
}

impl DashboardConfig {
    /// Resolve the word cloud sentiment against the labels actually present.
    ///
    /// An explicit choice is kept even if no record carries it (the cloud is
    /// then empty); otherwise the first label wins.
    #[must_use]
    pub fn resolve_sentiment(&self, labels: &[String]) -> Option<String> {
        self.sentiment.clone().or_else(|| labels.first().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sentiment() {
        let labels = vec!["neutral".to_string(), "positive".to_string()];
        let config = DashboardConfig::default();
        assert_eq!(config.resolve_sentiment(&labels).as_deref(), Some("neutral"));
        assert_eq!(config.resolve_sentiment(&[]), None);

        let config = DashboardConfig { sentiment: Some("angry".into()), ..Default::default() };
        assert_eq!(config.resolve_sentiment(&labels).as_deref(), Some("angry"));
    }
}
