//! Report export for headless runs
//!
//! Builds the same views the dashboard shows and writes them either as a
//! plain-text report or as JSON.

mod report;

pub use report::{DashboardReport, RawPreview, WordCloudReport};
