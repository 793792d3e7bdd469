//! Geolocation lookup client and result types.
//!
//! This module provides the normalized lookup contract: a stateless client
//! that queries the external geolocation provider (with a two-step fallback
//! chain for self-address detection) and maps raw payloads and failures
//! onto [`LookupResult`] and [`LookupError`].

mod client;
mod error;
mod payload;
mod types;

pub use client::GeoClient;
pub use error::{LookupError, LookupErrorKind};
pub use types::{Coordinates, LookupResult, Target};
