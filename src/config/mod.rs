//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, limits, storage keys)
//! - Library configuration and CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{default_data_dir, Config, LogFormat, LogLevel};
