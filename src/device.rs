//! Device and browser classification.
//!
//! Device slots are normally filled by an external user-agent-parsing
//! capability. When none is installed (or it fails), a deterministic
//! substring classifier over the raw user-agent string takes over.

use crate::config::UNKNOWN;

/// Coarse device class derived from the user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Phone or other handheld
    Mobile,
    /// Tablet
    Tablet,
    /// Desktop or laptop (the default when no mobile marker matches)
    Desktop,
}

impl DeviceClass {
    /// Returns a human-readable label for the device class.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "Mobile",
            DeviceClass::Tablet => "Tablet",
            DeviceClass::Desktop => "Desktop",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified device information rendered alongside lookup results.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DeviceInfo {
    /// Browser family name
    pub browser: String,
    /// Operating system name
    pub os: String,
    /// Coarse device class label
    pub device_class: String,
    /// CPU architecture, when recognizable
    pub cpu: Option<String>,
    /// Rendering engine, when recognizable
    pub engine: Option<String>,
}

/// External user-agent-parsing capability.
///
/// Implementations wrap a full-featured parser; a failure here is not an
/// application error, it only routes the caller to the built-in substring
/// classifier.
pub trait DeviceProfiler {
    /// Parses `user_agent` into device information.
    ///
    /// # Errors
    ///
    /// Any error routes the caller to [`classify_user_agent`].
    fn profile(&self, user_agent: &str) -> anyhow::Result<DeviceInfo>;
}

/// Fills the device slots from the optional capability, falling back to the
/// substring classifier when the capability is absent or fails.
pub fn device_info(profiler: Option<&dyn DeviceProfiler>, user_agent: &str) -> DeviceInfo {
    if let Some(profiler) = profiler {
        match profiler.profile(user_agent) {
            Ok(info) => return info,
            Err(e) => {
                log::debug!("Device profiler failed ({e}); using the substring classifier");
            }
        }
    }
    classify_user_agent(user_agent)
}

/// Deterministic substring classifier over a raw user-agent string.
///
/// Recognizes at minimum Chrome, Firefox, Safari, and Edge for the browser;
/// Windows, macOS, Linux, Android, and iOS for the operating system; and
/// Mobile, Tablet, and Desktop for the device class (Desktop when no
/// mobile or tablet marker matches).
pub fn classify_user_agent(user_agent: &str) -> DeviceInfo {
    DeviceInfo {
        browser: classify_browser(user_agent).to_string(),
        os: classify_os(user_agent).to_string(),
        device_class: classify_device(user_agent).to_string(),
        cpu: classify_cpu(user_agent).map(str::to_string),
        engine: classify_engine(user_agent).map(str::to_string),
    }
}

fn classify_browser(ua: &str) -> &'static str {
    // Order matters: Edge and Chrome both advertise "Safari" and "Chrome"
    if ua.contains("Edg/") || ua.contains("Edge/") {
        "Edge"
    } else if ua.contains("Firefox") || ua.contains("FxiOS") {
        "Firefox"
    } else if ua.contains("Chrome") || ua.contains("CriOS") {
        "Chrome"
    } else if ua.contains("Safari") {
        "Safari"
    } else {
        UNKNOWN
    }
}

fn classify_os(ua: &str) -> &'static str {
    if ua.contains("Windows") {
        "Windows"
    } else if ua.contains("Android") {
        "Android"
    } else if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("like Mac OS X") {
        "iOS"
    } else if ua.contains("Mac OS X") || ua.contains("Macintosh") {
        "macOS"
    } else if ua.contains("Linux") || ua.contains("X11") {
        "Linux"
    } else {
        UNKNOWN
    }
}

fn classify_device(ua: &str) -> DeviceClass {
    if ua.contains("iPad") || ua.contains("Tablet") || (ua.contains("Android") && !ua.contains("Mobile")) {
        DeviceClass::Tablet
    } else if ua.contains("Mobi") || ua.contains("iPhone") {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

fn classify_cpu(ua: &str) -> Option<&'static str> {
    if ua.contains("aarch64") || ua.contains("arm64") || ua.contains("ARM") {
        Some("arm64")
    } else if ua.contains("x86_64") || ua.contains("Win64") || ua.contains("x64") {
        Some("amd64")
    } else {
        None
    }
}

fn classify_engine(ua: &str) -> Option<&'static str> {
    if ua.contains("Firefox") {
        Some("Gecko")
    } else if ua.contains("Chrome") || ua.contains("CriOS") || ua.contains("Edg") {
        Some("Blink")
    } else if ua.contains("AppleWebKit") {
        Some("WebKit")
    } else {
        None
    }
}
