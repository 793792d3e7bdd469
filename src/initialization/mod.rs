//! Application initialization.
//!
//! Logger and HTTP client setup, plus the error types for initialization
//! failures.

mod client;
mod logger;

pub use client::init_http_client;
pub use logger::init_logger_with;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::storage::StorageError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    Logger(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] ReqwestError),

    /// A configured endpoint is not a usable base URL.
    #[error("Invalid endpoint URL {url}: {source}")]
    Endpoint {
        /// The offending URL as configured
        url: String,
        /// The underlying parse failure
        source: url::ParseError,
    },

    /// Error opening the durable store.
    #[error("Storage initialization error: {0}")]
    Storage(#[from] StorageError),
}
