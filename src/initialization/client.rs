//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

use super::InitializationError;

/// Initializes the HTTP client used for provider requests.
///
/// Creates a `reqwest::Client` configured with:
/// - Timeout from the configuration
/// - User-Agent header from the configuration
/// - Rustls TLS backend
///
/// # Errors
///
/// Returns `InitializationError::HttpClient` if client creation fails.
pub fn init_http_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_http_client_with_defaults() {
        let config = Config::default();
        assert!(init_http_client(&config).is_ok());
    }
}
