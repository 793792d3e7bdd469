//! Lookup data structures.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Normalized outcome of a geolocation query.
///
/// `ip` is always present and well-formed; every other field is
/// independently optional and absent when the provider omitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    /// The looked-up IPv4 address
    pub ip: String,
    /// City name, if reported
    pub city: Option<String>,
    /// Region or state name, if reported
    pub region: Option<String>,
    /// Country name or code, if reported
    pub country: Option<String>,
    /// Geographic coordinates, absent when omitted or unparseable
    pub coordinates: Option<Coordinates>,
    /// ISP or AS name, if reported
    pub organization: Option<String>,
    /// IANA timezone name, if reported
    pub timezone: Option<String>,
}

/// Target of a geolocation query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Geolocate the requester's own address.
    SelfAddr,
    /// Geolocate an explicit IPv4 address.
    Addr(String),
}
