//! Integration tests for the self-address detection fallback chain.

mod helpers;

use httptest::{matchers::*, responders::*, Expectation, Server};
use ipscope::{GeoClient, LookupError, Target};
use tempfile::TempDir;

use helpers::{provider_body, test_config};

#[tokio::test]
async fn test_direct_self_lookup_succeeds() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/json"))
            .respond_with(json_encoded(provider_body("203.0.113.7"))),
    );

    let dir = TempDir::new().unwrap();
    let client = GeoClient::new(&test_config(&server, dir.path())).unwrap();
    let result = client.lookup(&Target::SelfAddr).await.unwrap();

    assert_eq!(result.ip, "203.0.113.7");
    assert_eq!(result.city.as_deref(), Some("Mountain View"));
}

#[tokio::test]
async fn test_fallback_chain_yields_same_shape_as_direct_success() {
    // Direct path: provider answers the self-lookup immediately
    let direct_server = Server::run();
    direct_server.expect(
        Expectation::matching(request::method_path("GET", "/json"))
            .respond_with(json_encoded(provider_body("203.0.113.7"))),
    );

    // Fallback path: the self-lookup fails, the echo service supplies the
    // raw address, and the explicit-address lookup succeeds
    let fallback_server = Server::run();
    fallback_server.expect(
        Expectation::matching(request::method_path("GET", "/json"))
            .respond_with(status_code(500)),
    );
    fallback_server.expect(
        Expectation::matching(request::method_path("GET", "/echo"))
            .respond_with(json_encoded(serde_json::json!({"ip": "203.0.113.7"}))),
    );
    fallback_server.expect(
        Expectation::matching(request::method_path("GET", "/203.0.113.7/json"))
            .respond_with(json_encoded(provider_body("203.0.113.7"))),
    );

    let dir = TempDir::new().unwrap();
    let direct = GeoClient::new(&test_config(&direct_server, dir.path()))
        .unwrap()
        .lookup(&Target::SelfAddr)
        .await
        .unwrap();
    let via_fallback = GeoClient::new(&test_config(&fallback_server, dir.path()))
        .unwrap()
        .lookup(&Target::SelfAddr)
        .await
        .unwrap();

    assert_eq!(direct, via_fallback);
}

#[tokio::test]
async fn test_detection_failed_when_both_paths_fail() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/json"))
            .respond_with(status_code(500)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/echo"))
            .respond_with(status_code(500)),
    );

    let dir = TempDir::new().unwrap();
    let client = GeoClient::new(&test_config(&server, dir.path())).unwrap();
    let err = client.lookup(&Target::SelfAddr).await.unwrap_err();

    assert!(matches!(err, LookupError::DetectionFailed));
}

#[tokio::test]
async fn test_detection_failed_when_echo_succeeds_but_lookup_fails() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/json"))
            .respond_with(status_code(500)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/echo"))
            .respond_with(json_encoded(serde_json::json!({"ip": "203.0.113.7"}))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/203.0.113.7/json"))
            .respond_with(status_code(500)),
    );

    let dir = TempDir::new().unwrap();
    let client = GeoClient::new(&test_config(&server, dir.path())).unwrap();
    let err = client.lookup(&Target::SelfAddr).await.unwrap_err();

    assert!(matches!(err, LookupError::DetectionFailed));
}

#[tokio::test]
async fn test_explicit_lookup_does_not_fall_back() {
    // An explicit-address failure surfaces directly; the echo service must
    // never be consulted (the mock would reject the unexpected request)
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/1.2.3.4/json"))
            .respond_with(status_code(429)),
    );

    let dir = TempDir::new().unwrap();
    let client = GeoClient::new(&test_config(&server, dir.path())).unwrap();
    let err = client
        .lookup(&Target::Addr("1.2.3.4".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::RateLimited));
}
