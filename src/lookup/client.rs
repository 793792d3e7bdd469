//! Geolocation provider client.
//!
//! This module implements the normalized lookup contract against the
//! external geolocation provider, including the two-step fallback chain
//! used when detecting the requester's own address.

use log::{debug, warn};
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::initialization::{init_http_client, InitializationError};

use super::error::LookupError;
use super::payload::ProviderPayload;
use super::types::{LookupResult, Target};

/// Client for the external geolocation provider.
///
/// Stateless beyond its HTTP client and endpoint configuration: every call
/// is a single request/response exchange (or the documented fallback chain
/// for self-address detection). No `Debug` impl: the access token must not
/// end up in log output.
#[derive(Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    provider_url: Url,
    ip_echo_url: Url,
    token: Option<String>,
}

impl GeoClient {
    /// Creates a client from the library configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built
    /// or either configured endpoint is not a usable base URL.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let http = init_http_client(config)?;
        let provider_url = parse_base_url(&config.provider_url)?;
        let ip_echo_url = parse_base_url(&config.ip_echo_url)?;
        Ok(Self {
            http,
            provider_url,
            ip_echo_url,
            token: config.token.clone(),
        })
    }

    /// Looks up geolocation metadata for `target`.
    ///
    /// For [`Target::Addr`] a single provider request is issued. For
    /// [`Target::SelfAddr`] the provider is asked to geolocate the
    /// requester; on any failure the client fetches the raw address from
    /// the IP-echo service and retries with an explicit-address lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] describing the failure; self-address
    /// detection that exhausts both paths yields
    /// [`LookupError::DetectionFailed`].
    pub async fn lookup(&self, target: &Target) -> Result<LookupResult, LookupError> {
        match target {
            Target::Addr(ip) => self.query_provider(Some(ip)).await,
            Target::SelfAddr => self.detect_self().await,
        }
    }

    async fn detect_self(&self) -> Result<LookupResult, LookupError> {
        match self.query_provider(None).await {
            Ok(result) => Ok(result),
            Err(primary) => {
                debug!("Direct self-lookup failed ({primary}); trying the IP echo fallback");
                match self.fallback_via_echo().await {
                    Ok(result) => Ok(result),
                    Err(fallback) => {
                        warn!("Self-address detection failed on both paths: {primary}; {fallback}");
                        Err(LookupError::DetectionFailed)
                    }
                }
            }
        }
    }

    async fn fallback_via_echo(&self) -> Result<LookupResult, LookupError> {
        let ip = self.fetch_own_ip().await?;
        debug!("IP echo service reported {ip}");
        self.query_provider(Some(&ip)).await
    }

    async fn fetch_own_ip(&self) -> Result<String, LookupError> {
        #[derive(Deserialize)]
        struct EchoPayload {
            ip: String,
        }

        let mut url = self.ip_echo_url.clone();
        url.query_pairs_mut().append_pair("format", "json");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(LookupError::transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::status(status.as_u16()));
        }
        let payload: EchoPayload = response.json().await.map_err(LookupError::transport)?;
        Ok(payload.ip)
    }

    async fn query_provider(&self, ip: Option<&str>) -> Result<LookupResult, LookupError> {
        let url = self.endpoint(ip);
        debug!(
            "Querying geolocation provider for {}",
            ip.unwrap_or("the current address")
        );

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(LookupError::transport)?;

        let status = response.status();
        match status.as_u16() {
            429 => return Err(LookupError::RateLimited),
            401 => return Err(LookupError::Unauthorized),
            code if !status.is_success() => return Err(LookupError::status(code)),
            _ => {}
        }

        let payload: ProviderPayload = response.json().await.map_err(LookupError::transport)?;
        payload.normalize(ip)
    }

    /// Builds `GET <base>/{ip}/json` (or `<base>/json` for the requester's
    /// own address), appending the access token when configured.
    fn endpoint(&self, ip: Option<&str>) -> Url {
        let mut url = self.provider_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .expect("base URL validated at construction");
            segments.pop_if_empty();
            if let Some(ip) = ip {
                segments.push(ip);
            }
            segments.push("json");
        }
        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair("token", token);
        }
        url
    }
}

fn parse_base_url(raw: &str) -> Result<Url, InitializationError> {
    let url = Url::parse(raw).map_err(|source| InitializationError::Endpoint {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(InitializationError::Endpoint {
            url: raw.to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        });
    }
    Ok(url)
}
