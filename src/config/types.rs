//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and library configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_IP_ECHO_URL, DEFAULT_PROVIDER_URL, DEFAULT_USER_AGENT, HTTP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use ipscope::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     token: Some("abc123".to_string()),
///     data_dir: PathBuf::from("/tmp/ipscope"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the primary geolocation provider
    pub provider_url: String,

    /// Base URL of the IP-echo service used for detection fallback
    pub ip_echo_url: String,

    /// Optional provider access token, sent as a `token` query parameter
    pub token: Option<String>,

    /// Directory holding the durable key/value store (history, theme)
    pub data_dir: PathBuf,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// User-Agent string sent on requests and classified for device slots
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            ip_echo_url: DEFAULT_IP_ECHO_URL.to_string(),
            token: None,
            data_dir: default_data_dir(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Returns the default data directory for the durable store.
///
/// Uses the platform data directory (`~/.local/share/ipscope` on Linux) and
/// falls back to a hidden directory under the working directory when the
/// platform directory cannot be determined.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("ipscope"))
        .unwrap_or_else(|| PathBuf::from(".ipscope"))
}
