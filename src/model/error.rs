//! Error types for the roster application.
//!
//! Hierarchical error taxonomy using `thiserror`, composing via `?` and
//! `From` conversions.
//!
//! The only runtime failure mode the dashboard itself has is the dataset
//! load ([`SourceError`]), and that one is deliberately non-fatal: it is
//! logged at the load boundary and the UI starts with an empty roster.
//! Every state transition in `state` is total, so nothing below the shell
//! can fail. Config, logging and terminal errors are startup failures and
//! propagate out of `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Returned from `main` wiring; all domain-specific error types convert
/// into it via `From`, enabling clean `?` propagation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the roster dataset from its source.
    ///
    /// Only surfaced when a caller chooses to propagate it; the normal
    /// startup path logs it and continues with an empty dataset instead.
    #[error("Failed to load roster: {0}")]
    Source(#[from] SourceError),

    /// Failed to read or parse the configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize the tracing subscriber.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while loading the roster dataset.
///
/// The dataset comes either from a one-shot HTTP GET or from a local JSON
/// file. Distinct variants keep the log line at the load boundary precise
/// about what went wrong.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network-level failure or undecodable response body from the
    /// endpoint. `reqwest` reports both through the same error type.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code.
    #[error("Unexpected status {code} from {url}")]
    Status {
        /// HTTP status code returned by the endpoint.
        code: u16,
        /// The URL that was requested.
        url: String,
    },

    /// A local dataset file could not be read.
    #[error("Failed to read dataset file {path}: {source}")]
    FileRead {
        /// The file path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A local dataset file did not contain a valid record array.
    #[error("Invalid JSON in dataset file {path}: {source}")]
    FileDecode {
        /// The file path with invalid contents.
        path: PathBuf,
        /// The JSON parse error.
        #[source]
        source: serde_json::Error,
    },
}
