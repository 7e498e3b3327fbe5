//! Tweet dataset model and loader
//!
//! The dataset is read once from a CSV file with a header row. Each row becomes
//! a [`TweetRecord`] with the two columns the dashboard needs typed out, and
//! every raw value kept in header order so other columns pass through.
//!
//! [`DatasetLoader`] memoizes loads per path. Concurrent first calls for the
//! same path read the file exactly once; later calls get the same
//! `Arc<Dataset>` even if the file changed on disk in between.

use log::{debug, info, warn};
use once_cell::sync::{Lazy, OnceCell};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use crate::domain::DatasetError;

/// Default input file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "Tweets.csv";

pub const SENTIMENT_COLUMN: &str = "airline_sentiment";
pub const TEXT_COLUMN: &str = "text";
pub const LENGTH_COLUMN: &str = "tweet_length";

/// A single tweet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetRecord {
    pub airline_sentiment: String,
    pub text: String,
    /// Set only on tables derived through [`crate::analysis::with_lengths`]
    pub tweet_length: Option<usize>,
    /// Raw values for every column, in header order
    pub fields: Vec<String>,
}

impl TweetRecord {
    /// Build a record with only the two required columns.
    pub fn new(airline_sentiment: impl Into<String>, text: impl Into<String>) -> Self {
        let airline_sentiment = airline_sentiment.into();
        let text = text.into();
        Self {
            fields: vec![airline_sentiment.clone(), text.clone()],
            airline_sentiment,
            text,
            tweet_length: None,
        }
    }
}

/// In-memory tweet table (immutable once loaded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<TweetRecord>,
}

impl Dataset {
    /// Build a dataset from `(sentiment, text)` pairs with the minimal header.
    pub fn from_pairs<S, T>(rows: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            headers: vec![SENTIMENT_COLUMN.to_string(), TEXT_COLUMN.to_string()],
            records: rows.into_iter().map(|(s, t)| TweetRecord::new(s, t)).collect(),
        }
    }

    /// Read and validate a CSV file. Uncached; see [`DatasetLoader`].
    ///
    /// # Errors
    /// `FileAccess` if the file cannot be opened or read, `Format` or
    /// `MissingColumn` if the content is not a CSV table with the required header.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let started = Instant::now();

        let file = File::open(path)
            .map_err(|source| DatasetError::FileAccess { path: path.to_path_buf(), source })?;
        let dataset = Self::from_reader(BufReader::new(file), path)?;

        info!(
            "Loaded {} records ({} columns) from {} in {:.1?}",
            dataset.len(),
            dataset.headers.len(),
            path.display(),
            started.elapsed()
        );
        Ok(dataset)
    }

    /// Parse CSV content from any reader. `origin` is only used in errors.
    ///
    /// # Errors
    /// Same as [`Dataset::from_file`].
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self, DatasetError> {
        let mut csv_reader =
            csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| csv_error(origin, e))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(DatasetError::Format {
                path: origin.to_path_buf(),
                reason: "no header row".to_string(),
            });
        }

        let sentiment_idx = column_index(&headers, SENTIMENT_COLUMN, origin)?;
        let text_idx = column_index(&headers, TEXT_COLUMN, origin)?;

        let mut records = Vec::new();
        let mut padded_rows = 0usize;

        for row in csv_reader.records() {
            let row = row.map_err(|e| csv_error(origin, e))?;

            if row.len() > headers.len() {
                let line = row.position().map_or(0, csv::Position::line);
                return Err(DatasetError::Format {
                    path: origin.to_path_buf(),
                    reason: format!(
                        "line {line}: expected {} fields, found {}",
                        headers.len(),
                        row.len()
                    ),
                });
            }

            // Short rows are padded, like a dataframe reader filling missing values
            let mut fields: Vec<String> = row.iter().map(str::to_string).collect();
            if fields.len() < headers.len() {
                padded_rows += 1;
                fields.resize(headers.len(), String::new());
            }

            records.push(TweetRecord {
                airline_sentiment: fields[sentiment_idx].clone(),
                text: fields[text_idx].clone(),
                tweet_length: None,
                fields,
            });
        }

        if padded_rows > 0 {
            warn!("{padded_rows} short rows in {} padded with empty values", origin.display());
        }

        Ok(Self { headers, records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` records (fewer if the table is shorter)
    #[must_use]
    pub fn head(&self, n: usize) -> &[TweetRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Distinct sentiment labels in order of first appearance
    #[must_use]
    pub fn sentiment_labels(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.airline_sentiment.as_str()))
            .map(|r| r.airline_sentiment.clone())
            .collect()
    }

    /// Position of a column in the header, if present
    #[must_use]
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

fn column_index(
    headers: &[String],
    column: &'static str,
    origin: &Path,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DatasetError::MissingColumn { path: origin.to_path_buf(), column })
}

fn csv_error(origin: &Path, err: csv::Error) -> DatasetError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => {
            DatasetError::FileAccess { path: origin.to_path_buf(), source }
        }
        _ => DatasetError::Format { path: origin.to_path_buf(), reason },
    }
}

// =============================================================================
// MEMOIZED LOADER
// =============================================================================

static GLOBAL_LOADER: Lazy<DatasetLoader> = Lazy::new(DatasetLoader::new);

/// Load-once cache of datasets, keyed by path as given.
///
/// Each path gets its own `OnceCell`; the map lock is only held long enough
/// to fetch the cell, so loads of different paths do not serialize each other.
/// Failed loads drop their entry and may be retried.
#[derive(Debug, Default)]
pub struct DatasetLoader {
    cells: Mutex<HashMap<PathBuf, Arc<OnceCell<Arc<Dataset>>>>>,
}

impl DatasetLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide loader shared by the CLI and TUI
    pub fn global() -> &'static DatasetLoader {
        &GLOBAL_LOADER
    }

    /// Return the dataset for `path`, reading the file only on first use.
    ///
    /// # Errors
    /// Propagates [`Dataset::from_file`] errors from the first successful-or-failed read.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<Dataset>, DatasetError> {
        let path = path.as_ref();
        let cell = {
            let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(cells.entry(path.to_path_buf()).or_default())
        };

        if let Some(dataset) = cell.get() {
            debug!("Dataset cache hit for {}", path.display());
            return Ok(Arc::clone(dataset));
        }

        let loaded =
            cell.get_or_try_init(|| Dataset::from_file(path).map(Arc::new)).map(Arc::clone);
        if loaded.is_err() {
            let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
            if cells.get(path).is_some_and(|c| Arc::ptr_eq(c, &cell) && c.get().is_none()) {
                cells.remove(path);
            }
        }
        loaded
    }

    /// Whether a successful load for `path` is cached
    #[must_use]
    pub fn is_cached(&self, path: impl AsRef<Path>) -> bool {
        let cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells.get(path.as_ref()).is_some_and(|cell| cell.get().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Dataset, DatasetError> {
        Dataset::from_reader(content.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_parses_required_columns_and_passes_others_through() {
        let ds = parse(
            "tweet_id,airline_sentiment,airline,text\n\
             1,positive,Virgin America,\"good flight, thanks\"\n\
             2,negative,United,bad delay\n",
        )
        .unwrap();

        assert_eq!(ds.headers, vec!["tweet_id", "airline_sentiment", "airline", "text"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].airline_sentiment, "positive");
        assert_eq!(ds.records[0].text, "good flight, thanks");
        assert_eq!(ds.records[0].fields[2], "Virgin America");
        assert_eq!(ds.records[1].fields[0], "2");
        assert_eq!(ds.records[1].tweet_length, None);
    }

    #[test]
    fn test_failed_load_leaves_no_entry() {
        let loader = DatasetLoader::new();
        for name in ["missing-a.csv", "missing-b.csv"] {
            let err = loader.load(Path::new("/nonexistent/dir").join(name)).unwrap_err();
            assert!(matches!(err, DatasetError::FileAccess { .. }));
        }
        assert!(loader.cells.lock().unwrap().is_empty());
        assert!(!loader.is_cached("/nonexistent/dir/missing-a.csv"));
    }

    #[test]
    fn test_missing_text_column() {
        let err = parse("airline_sentiment,airline\npositive,United\n").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn { column: "text", .. }));
    }

    #[test]
    fn test_empty_file_is_format_error() {
        let err = parse("").unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let ds = parse("airline_sentiment,text\n").unwrap();
        assert!(ds.is_empty());
        assert!(ds.sentiment_labels().is_empty());
    }

    #[test]
    fn test_short_row_is_padded() {
        let ds = parse("text,airline_sentiment,airline\nhello,neutral\n").unwrap();
        assert_eq!(ds.records[0].airline_sentiment, "neutral");
        assert_eq!(ds.records[0].fields, vec!["hello", "neutral", ""]);

        let ds = parse("airline_sentiment,text\nneutral\n").unwrap();
        assert_eq!(ds.records[0].text, "");
    }

    #[test]
    fn test_long_row_is_format_error() {
        let err = parse("airline_sentiment,text\npositive,a,b\n").unwrap_err();
        match err {
            DatasetError::Format { reason, .. } => assert!(reason.contains("line 2")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sentiment_labels_first_seen_order() {
        let ds = Dataset::from_pairs([
            ("neutral", "a"),
            ("positive", "b"),
            ("neutral", "c"),
            ("negative", "d"),
        ]);
        assert_eq!(ds.sentiment_labels(), vec!["neutral", "positive", "negative"]);
    }

    #[test]
    fn test_head_clamps_to_length() {
        let ds = Dataset::from_pairs([("positive", "a"), ("negative", "b")]);
        assert_eq!(ds.head(5).len(), 2);
        assert_eq!(ds.head(1)[0].text, "a");
    }

    #[test]
    fn test_loader_missing_file_is_not_cached() {
        let loader = DatasetLoader::new();
        let err = loader.load("/definitely/not/here/Tweets.csv").unwrap_err();
        assert!(matches!(err, DatasetError::FileAccess { .. }));
        assert!(!loader.is_cached("/definitely/not/here/Tweets.csv"));
    }
}
