//! Application-level error types.

use thiserror::Error;

use crate::lookup::LookupError;

/// Error types for controller actions.
///
/// Every variant is a user-facing condition: the message is shown as-is and
/// the action leaves the current result and the history untouched. None of
/// these errors terminates the session.
#[derive(Error, Debug)]
pub enum AppError {
    /// The search input was empty.
    #[error("Enter an IP address to look up.")]
    EmptyInput,

    /// The search input was not a well-formed IPv4 address.
    #[error("\"{0}\" is not a valid IPv4 address.")]
    InvalidInput(String),

    /// A lookup against the provider failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Copy was requested before any lookup succeeded.
    #[error("Nothing to copy yet. Run a lookup first.")]
    NothingToCopy,

    /// Export was requested before any lookup succeeded.
    #[error("Nothing to export yet. Run a lookup first.")]
    NothingToExport,

    /// No document-generation capability is configured.
    #[error("Report export is not available.")]
    ExportUnavailable,

    /// The selected history entry does not exist.
    #[error("No history entry found for {0}.")]
    UnknownHistoryEntry(String),

    /// The response arrived after a newer lookup was issued and was
    /// discarded without touching the current result.
    #[error("This lookup was superseded by a newer request.")]
    Superseded,

    /// The report document could not be produced or written.
    #[error("Failed to export report: {0}")]
    Export(#[source] anyhow::Error),
}
