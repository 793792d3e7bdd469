//! Lookup error types.

use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for geolocation lookups.
///
/// Every variant carries a human-readable message suitable for direct
/// display; none of them is fatal to the application.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The provider reported a throttling status (HTTP 429).
    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimited,

    /// The provider rejected the access token (HTTP 401).
    #[error("The provider rejected the request: invalid access token.")]
    Unauthorized,

    /// The provider response embedded an explicit error payload.
    #[error("Provider error: {message}")]
    Provider {
        /// Message taken from the provider's error payload.
        message: String,
    },

    /// Any other non-success response or network failure.
    #[error("{message}")]
    Transport {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Human-readable description, including the status when available.
        message: String,
    },

    /// Both the direct self-lookup and the two-step fallback failed.
    #[error("Could not detect the current IP address. Check your connection and try again.")]
    DetectionFailed,
}

impl LookupError {
    /// Builds a [`LookupError::Transport`] from a `reqwest` failure.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        let message = match status {
            Some(code) => format!("Request failed with status {code}"),
            None => format!("Request failed: {err}"),
        };
        LookupError::Transport { status, message }
    }

    /// Builds a [`LookupError::Transport`] for a non-success HTTP status.
    pub(crate) fn status(code: u16) -> Self {
        LookupError::Transport {
            status: Some(code),
            message: format!("Request failed with status {code}"),
        }
    }

    /// Returns the coarse category of this error.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::RateLimited => LookupErrorKind::RateLimited,
            LookupError::Unauthorized => LookupErrorKind::Unauthorized,
            LookupError::Provider { .. } => LookupErrorKind::ProviderError,
            LookupError::Transport { .. } => LookupErrorKind::TransportError,
            LookupError::DetectionFailed => LookupErrorKind::DetectionFailed,
        }
    }
}

/// Coarse categories of lookup failures, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupErrorKind {
    /// Provider throttled the request (HTTP 429)
    RateLimited,
    /// Provider rejected the credentials (HTTP 401)
    Unauthorized,
    /// Provider-side error payload
    ProviderError,
    /// Transport-level failure or unexpected status
    TransportError,
    /// Self-address detection exhausted all paths
    DetectionFailed,
}

impl LookupErrorKind {
    /// Returns a human-readable label for the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorKind::RateLimited => "Rate limited",
            LookupErrorKind::Unauthorized => "Unauthorized",
            LookupErrorKind::ProviderError => "Provider error",
            LookupErrorKind::TransportError => "Transport error",
            LookupErrorKind::DetectionFailed => "Detection failed",
        }
    }
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
