//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application: provider endpoints, history limits, storage keys, and
//! display placeholders.

/// Base URL of the primary geolocation provider.
///
/// The provider answers `GET <base>/{ip}/json` for an explicit address and
/// `GET <base>/json` for the requester's own address, optionally
/// authenticated with a `token` query parameter.
pub const DEFAULT_PROVIDER_URL: &str = "https://ipinfo.io";

/// Base URL of the IP-echo service used as the detection fallback.
///
/// Answers `GET <base>?format=json` with `{"ip": "<address>"}`.
pub const DEFAULT_IP_ECHO_URL: &str = "https://api.ipify.org";

/// Per-request HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Maximum number of entries the lookup history retains.
///
/// Adding an entry beyond this limit evicts the oldest one.
pub const HISTORY_CAPACITY: usize = 50;

/// Zoom level used when focusing the map on a looked-up location.
pub const MAP_ZOOM: u8 = 13;

/// Storage key holding the serialized lookup history.
pub const HISTORY_STORAGE_KEY: &str = "history";

/// Storage key holding the selected theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Environment variable consulted for the provider access token.
pub const TOKEN_ENV_VAR: &str = "IPSCOPE_TOKEN";

/// Placeholder rendered for missing display values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder substituted for missing name-like values (city, country, ...).
pub const UNKNOWN: &str = "Unknown";

/// Default User-Agent string.
///
/// Sent on provider requests and fed to the device classifier when the host
/// environment supplies no user-agent of its own. Users can override it via
/// the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
