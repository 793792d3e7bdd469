//! Result presentation.
//!
//! Maps a normalized lookup result onto the fixed set of display slots and
//! drives the external map capability. The device slots are filled by the
//! optional user-agent-parsing capability, with the substring classifier as
//! fallback.

mod map;
mod slots;

pub use map::{LinkMap, MapPin, MapView, RecordingMap};
pub use slots::{location_line, DisplaySlots};

use colored::Colorize;

use crate::device::{device_info, DeviceProfiler};
use crate::lookup::LookupResult;

/// Renders lookup results into display slots and onto the map capability.
pub struct Presenter<M: MapView> {
    map: M,
    profiler: Option<Box<dyn DeviceProfiler>>,
    user_agent: String,
}

impl<M: MapView> Presenter<M> {
    /// Creates a presenter over the given map capability.
    ///
    /// `user_agent` is the string classified into the device slots.
    pub fn new(map: M, user_agent: impl Into<String>) -> Self {
        Self {
            map,
            profiler: None,
            user_agent: user_agent.into(),
        }
    }

    /// Installs an external user-agent-parsing capability.
    pub fn with_profiler(mut self, profiler: Box<dyn DeviceProfiler>) -> Self {
        self.profiler = Some(profiler);
        self
    }

    /// Fills the display slots for a result without rendering anything.
    pub fn slots(&self, result: &LookupResult) -> DisplaySlots {
        let device = device_info(self.profiler.as_deref(), &self.user_agent);
        DisplaySlots::build(result, &device)
    }

    /// Renders a result: prints the display slots and drives the map.
    ///
    /// With coordinates present the map is recentered at the fixed zoom
    /// with a fresh marker and popup; otherwise the map shows its inline
    /// unavailable state. Missing fields render as placeholders, never as
    /// an error.
    pub fn render(&mut self, result: &LookupResult) -> DisplaySlots {
        let slots = self.slots(result);

        println!("{}", "Lookup result".bold());
        print_slot("IP Address", &slots.ip);
        print_slot("Location", &slots.location);
        print_slot("Coordinates", &slots.coordinates);
        print_slot("ISP / Org", &slots.organization);
        print_slot("Timezone", &slots.timezone);
        println!("{}", "Your device".bold());
        print_slot("Browser", &slots.browser);
        print_slot("OS", &slots.os);
        print_slot("Device", &slots.device);
        print_slot("CPU", &slots.cpu);
        print_slot("Engine", &slots.engine);

        match result.coordinates {
            Some(coords) => {
                let popup = format!(
                    "{} | {} | {}",
                    slots.ip, slots.location, slots.organization
                );
                self.map
                    .focus(&MapPin::at(coords.latitude, coords.longitude, popup));
            }
            None => {
                self.map
                    .unavailable("no coordinates reported for this address");
            }
        }

        slots
    }

    /// The map capability, for callers that drive it directly.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }
}

fn print_slot(label: &str, value: &str) {
    println!("  {:<12} {}", format!("{label}:").cyan(), value);
}
