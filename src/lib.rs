//! ipscope library: IP geolocation lookup with local history
//!
//! This library looks up geolocation and network metadata for an IPv4
//! address (or the current device's own address) against an external
//! provider, renders the result into a fixed set of display slots plus a
//! map annotation, records a bounded, deduplicated, most-recent-first
//! search history in durable local storage, and exports reports.
//!
//! # Example
//!
//! ```no_run
//! use ipscope::{AppController, Config};
//! use ipscope::present::LinkMap;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut controller = AppController::new(&config, LinkMap)?;
//!
//! let result = controller.search("8.8.8.8").await?;
//! println!("{} is in {:?}", result.ip, result.city);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups require a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling them within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod device;
pub mod export;
pub mod history;
pub mod initialization;
pub mod lookup;
pub mod present;
pub mod storage;
pub mod validate;

// Re-export public API
pub use app::{AppController, AppError};
pub use config::{Config, LogFormat, LogLevel};
pub use history::{HistoryEntry, HistoryStore};
pub use lookup::{GeoClient, LookupError, LookupErrorKind, LookupResult, Target};
pub use validate::is_valid_ipv4;
