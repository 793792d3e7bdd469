//! Provider payload parsing and normalization.

use log::debug;
use serde::Deserialize;

use super::error::LookupError;
use super::types::{Coordinates, LookupResult};

/// Raw JSON body returned by the geolocation provider.
///
/// Success bodies carry the address fields; provider-side failures embed an
/// `error` object inside an otherwise successful response.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderPayload {
    ip: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    loc: Option<String>,
    org: Option<String>,
    timezone: Option<String>,
    error: Option<ProviderErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    title: Option<String>,
    message: Option<String>,
}

impl ProviderErrorBody {
    fn into_message(self) -> String {
        self.message
            .or(self.title)
            .unwrap_or_else(|| "The provider reported an error".to_string())
    }
}

impl ProviderPayload {
    /// Normalizes the raw payload into a [`LookupResult`].
    ///
    /// `requested_ip` is the address the caller asked about, used when the
    /// provider echoes no `ip` field of its own. An embedded error object
    /// takes precedence and maps to [`LookupError::Provider`].
    pub(crate) fn normalize(
        self,
        requested_ip: Option<&str>,
    ) -> Result<LookupResult, LookupError> {
        if let Some(error) = self.error {
            return Err(LookupError::Provider {
                message: error.into_message(),
            });
        }

        let ip = match self.ip.filter(|s| !s.is_empty()) {
            Some(ip) => ip,
            None => match requested_ip {
                Some(ip) => ip.to_string(),
                None => {
                    return Err(LookupError::Provider {
                        message: "The provider response carried no IP address".to_string(),
                    })
                }
            },
        };

        let coordinates = self.loc.as_deref().and_then(parse_loc);

        Ok(LookupResult {
            ip,
            city: self.city.filter(|s| !s.is_empty()),
            region: self.region.filter(|s| !s.is_empty()),
            country: self.country.filter(|s| !s.is_empty()),
            coordinates,
            organization: self.org.filter(|s| !s.is_empty()),
            timezone: self.timezone.filter(|s| !s.is_empty()),
        })
    }
}

/// Parses the provider's combined `"lat,lon"` field.
///
/// Returns `None` when either half fails to parse as a finite number;
/// malformed coordinates are dropped rather than treated as an error.
pub(crate) fn parse_loc(loc: &str) -> Option<Coordinates> {
    let (lat, lon) = loc.split_once(',')?;
    let latitude: f64 = lat.trim().parse().ok()?;
    let longitude: f64 = lon.trim().parse().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        debug!("Dropping non-finite coordinates from loc field {loc:?}");
        return None;
    }
    Some(Coordinates {
        latitude,
        longitude,
    })
}
