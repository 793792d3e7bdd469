//! Shared helpers for integration tests.

use std::path::Path;

use httptest::Server;
use ipscope::Config;

/// Builds a library configuration pointed at a mock provider server and a
/// throwaway data directory.
#[allow(dead_code)]
pub fn test_config(server: &Server, data_dir: &Path) -> Config {
    Config {
        provider_url: server.url_str(""),
        ip_echo_url: server.url_str("/echo"),
        data_dir: data_dir.to_path_buf(),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// A typical provider success body for `ip`.
#[allow(dead_code)]
pub fn provider_body(ip: &str) -> serde_json::Value {
    serde_json::json!({
        "ip": ip,
        "city": "Mountain View",
        "region": "California",
        "country": "US",
        "loc": "37.4056,-122.0775",
        "org": "AS15169 Google LLC",
        "timezone": "America/Los_Angeles"
    })
}
