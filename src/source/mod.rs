//! Roster dataset sources.
//!
//! The dataset comes either from a one-shot HTTP GET against a JSON
//! endpoint or from a local JSON file. Sum type enforces exactly one
//! variant. Loading happens once at startup; there is no retry, no
//! cancellation and no refresh.

use crate::model::{SourceError, UserRecord};
use std::path::PathBuf;

pub mod file;
pub mod http;

pub use file::load_file;
pub use http::fetch_remote;

/// Default dataset endpoint.
pub const DEFAULT_API_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Unified source for the roster dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// One-shot HTTP GET against a JSON endpoint.
    Remote(String),
    /// Local JSON file (an array of record objects).
    File(PathBuf),
}

impl RecordSource {
    /// Pick the source from CLI inputs: a file path wins over the URL.
    pub fn detect(file: Option<PathBuf>, url: String) -> Self {
        match file {
            Some(path) => Self::File(path),
            None => Self::Remote(url),
        }
    }

    /// Load the dataset.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` for network, status, I/O or decode failures.
    pub fn load(&self) -> Result<Vec<UserRecord>, SourceError> {
        match self {
            Self::Remote(url) => fetch_remote(url),
            Self::File(path) => load_file(path),
        }
    }

    /// Load the dataset, degrading a failure to an empty roster.
    ///
    /// The only external failure mode this application has is the dataset
    /// load; it is logged here and never surfaced as a user-visible error
    /// state. Worst case the UI shows an empty table.
    pub fn load_or_empty(&self) -> Vec<UserRecord> {
        match self.load() {
            Ok(records) => {
                tracing::info!(count = records.len(), source = ?self, "Roster loaded");
                records
            }
            Err(err) => {
                tracing::warn!(error = %err, source = ?self, "Roster load failed; starting empty");
                Vec::new()
            }
        }
    }
}
