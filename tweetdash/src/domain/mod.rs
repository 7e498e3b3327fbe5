//! Domain model for tweetdash
//!
//! Core record types live in [`crate::dataset`]; this module holds the
//! structured errors shared by the loader, exporter and TUI.

pub mod errors;

pub use errors::{DatasetError, ExportError, TuiError};
