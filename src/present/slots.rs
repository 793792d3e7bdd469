//! Fixed display slots.

use serde::Serialize;

use crate::config::{NOT_AVAILABLE, UNKNOWN};
use crate::device::DeviceInfo;
use crate::lookup::LookupResult;

/// The fixed set of named display slots a rendered result fills.
///
/// Every slot always holds a printable value: missing optional fields are
/// substituted with `"N/A"` (or `"Unknown"` for name-like parts) rather
/// than left blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySlots {
    /// The looked-up address
    pub ip: String,
    /// Combined `"<city>, <region> <country>"` line
    pub location: String,
    /// `"<lat>, <lon>"`, or `"N/A"` when coordinates are absent
    pub coordinates: String,
    /// ISP or AS name
    pub organization: String,
    /// IANA timezone name
    pub timezone: String,
    /// Browser family
    pub browser: String,
    /// Operating system
    pub os: String,
    /// Device class
    pub device: String,
    /// CPU architecture
    pub cpu: String,
    /// Rendering engine
    pub engine: String,
}

impl DisplaySlots {
    /// Fills the slots from a lookup result and classified device info.
    pub fn build(result: &LookupResult, device: &DeviceInfo) -> Self {
        Self {
            ip: result.ip.clone(),
            location: location_line(result),
            coordinates: result
                .coordinates
                .map(|c| format!("{:.4}, {:.4}", c.latitude, c.longitude))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            organization: result
                .organization
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            timezone: result
                .timezone
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            browser: device.browser.clone(),
            os: device.os.clone(),
            device: device.device_class.clone(),
            cpu: device.cpu.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            engine: device
                .engine
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// Builds the combined location line `"<city>, <region> <country>"`.
///
/// Unknown parts are substituted and surrounding whitespace is trimmed.
pub fn location_line(result: &LookupResult) -> String {
    format!(
        "{}, {} {}",
        result.city.as_deref().unwrap_or(UNKNOWN),
        result.region.as_deref().unwrap_or(UNKNOWN),
        result.country.as_deref().unwrap_or(UNKNOWN)
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::classify_user_agent;
    use crate::lookup::Coordinates;

    fn full_result() -> LookupResult {
        LookupResult {
            ip: "8.8.8.8".to_string(),
            city: Some("Mountain View".to_string()),
            region: Some("California".to_string()),
            country: Some("US".to_string()),
            coordinates: Some(Coordinates {
                latitude: 37.4056,
                longitude: -122.0775,
            }),
            organization: Some("AS15169 Google LLC".to_string()),
            timezone: Some("America/Los_Angeles".to_string()),
        }
    }

    fn bare_result() -> LookupResult {
        LookupResult {
            ip: "1.1.1.1".to_string(),
            city: None,
            region: None,
            country: None,
            coordinates: None,
            organization: None,
            timezone: None,
        }
    }

    #[test]
    fn test_location_line_full() {
        assert_eq!(location_line(&full_result()), "Mountain View, California US");
    }

    #[test]
    fn test_location_line_substitutes_unknown() {
        let mut result = full_result();
        result.region = None;
        assert_eq!(location_line(&result), "Mountain View, Unknown US");

        assert_eq!(location_line(&bare_result()), "Unknown, Unknown Unknown");
    }

    #[test]
    fn test_build_full() {
        let slots = DisplaySlots::build(&full_result(), &classify_user_agent(""));
        assert_eq!(slots.ip, "8.8.8.8");
        assert_eq!(slots.coordinates, "37.4056, -122.0775");
        assert_eq!(slots.organization, "AS15169 Google LLC");
        assert_eq!(slots.timezone, "America/Los_Angeles");
    }

    #[test]
    fn test_build_missing_optionals_render_not_available() {
        let slots = DisplaySlots::build(&bare_result(), &classify_user_agent(""));
        assert_eq!(slots.coordinates, "N/A");
        assert_eq!(slots.organization, "N/A");
        assert_eq!(slots.timezone, "N/A");
        assert_eq!(slots.device, "Desktop");
    }
}
