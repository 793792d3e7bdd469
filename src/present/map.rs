//! Map capability.
//!
//! Map rendering itself is an external concern. The presenter only decides
//! what the map should show; implementations of [`MapView`] carry that out.

use crate::config::MAP_ZOOM;

/// Marker details handed to the map capability.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPin {
    /// Latitude of the marker, in degrees
    pub latitude: f64,
    /// Longitude of the marker, in degrees
    pub longitude: f64,
    /// Zoom level to center at
    pub zoom: u8,
    /// Popup text summarizing the looked-up address
    pub popup: String,
}

impl MapPin {
    /// Builds a pin at the fixed application zoom level.
    pub fn at(latitude: f64, longitude: f64, popup: String) -> Self {
        Self {
            latitude,
            longitude,
            zoom: MAP_ZOOM,
            popup,
        }
    }
}

/// External map-rendering capability.
///
/// `focus` replaces any previously placed marker, recenters on the pin, and
/// attaches its popup. `unavailable` shows an inline error state instead of
/// a map; it is not an application-level error.
pub trait MapView {
    /// Clears the previous marker, centers on `pin`, and places it.
    fn focus(&mut self, pin: &MapPin);

    /// Shows an inline "map unavailable" state with the given message.
    fn unavailable(&mut self, message: &str);
}

/// Terminal map capability that prints an OpenStreetMap link for the pin.
#[derive(Debug, Default)]
pub struct LinkMap;

impl MapView for LinkMap {
    fn focus(&mut self, pin: &MapPin) {
        println!(
            "Map:          https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}",
            lat = pin.latitude,
            lon = pin.longitude,
            zoom = pin.zoom,
        );
        println!("              {}", pin.popup);
    }

    fn unavailable(&mut self, message: &str) {
        println!("Map:          unavailable ({message})");
    }
}

/// Map capability that records calls instead of rendering.
///
/// Useful for embedding without a display and for asserting on presenter
/// behavior in tests.
#[derive(Debug, Default)]
pub struct RecordingMap {
    /// Pins received through `focus`, in order
    pub pins: Vec<MapPin>,
    /// Messages received through `unavailable`, in order
    pub errors: Vec<String>,
}

impl MapView for RecordingMap {
    fn focus(&mut self, pin: &MapPin) {
        self.pins.push(pin.clone());
    }

    fn unavailable(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
