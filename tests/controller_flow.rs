//! End-to-end controller scenarios against a mock provider.

mod helpers;

use httptest::{matchers::*, responders::*, Expectation, Server};
use ipscope::export::JsonReport;
use ipscope::present::RecordingMap;
use ipscope::{AppController, AppError};
use tempfile::TempDir;

use helpers::{provider_body, test_config};

fn make_controller(server: &Server, dir: &TempDir) -> AppController<RecordingMap> {
    AppController::new(&test_config(server, dir.path()), RecordingMap::default()).unwrap()
}

#[tokio::test]
async fn test_search_then_replay_then_export() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/8.8.8.8/json"))
            .respond_with(json_encoded(provider_body("8.8.8.8"))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/1.1.1.1/json"))
            .respond_with(json_encoded(provider_body("1.1.1.1"))),
    );

    let dir = TempDir::new().unwrap();
    let mut controller = make_controller(&server, &dir).with_renderer(Box::new(JsonReport));

    // Two searches populate the history newest-first
    controller.search("8.8.8.8").await.unwrap();
    controller.search("1.1.1.1").await.unwrap();
    let ips: Vec<&str> = controller
        .history()
        .all()
        .iter()
        .map(|e| e.ip.as_str())
        .collect();
    assert_eq!(ips, vec!["1.1.1.1", "8.8.8.8"]);

    // Replaying an older entry swaps the current result without a request
    controller.select_history("8.8.8.8").unwrap();
    assert_eq!(controller.current().unwrap().ip, "8.8.8.8");
    assert_eq!(controller.copy_current_ip().unwrap(), "8.8.8.8");

    // Export reflects the replayed result
    let report_dir = dir.path().join("reports");
    let path = controller.export_report(&report_dir).unwrap();
    let body = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["ip"], "8.8.8.8");
    assert_eq!(value["slots"]["location"], "Mountain View, California US");
}

#[tokio::test]
async fn test_detection_populates_history_like_a_search() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/json"))
            .respond_with(json_encoded(provider_body("203.0.113.7"))),
    );

    let dir = TempDir::new().unwrap();
    let mut controller = make_controller(&server, &dir);

    controller.detect_current().await.unwrap();
    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.history().all()[0].ip, "203.0.113.7");
}

#[tokio::test]
async fn test_repeated_search_moves_entry_to_front() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/8.8.8.8/json"))
            .times(2)
            .respond_with(json_encoded(provider_body("8.8.8.8"))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/1.1.1.1/json"))
            .respond_with(json_encoded(provider_body("1.1.1.1"))),
    );

    let dir = TempDir::new().unwrap();
    let mut controller = make_controller(&server, &dir);

    controller.search("8.8.8.8").await.unwrap();
    controller.search("1.1.1.1").await.unwrap();
    controller.search("8.8.8.8").await.unwrap();

    let ips: Vec<&str> = controller
        .history()
        .all()
        .iter()
        .map(|e| e.ip.as_str())
        .collect();
    assert_eq!(ips, vec!["8.8.8.8", "1.1.1.1"]);
}

#[tokio::test]
async fn test_map_is_driven_on_render() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/8.8.8.8/json"))
            .respond_with(json_encoded(provider_body("8.8.8.8"))),
    );
    // The provider reports no loc for the second address
    server.expect(
        Expectation::matching(request::method_path("GET", "/1.1.1.1/json")).respond_with(
            json_encoded(serde_json::json!({"ip": "1.1.1.1", "city": "Sydney"})),
        ),
    );

    let dir = TempDir::new().unwrap();
    let mut controller = make_controller(&server, &dir);

    controller.search("8.8.8.8").await.unwrap();
    let with_coords = controller.render_current().unwrap();
    assert_eq!(with_coords.coordinates, "37.4056, -122.0775");

    controller.search("1.1.1.1").await.unwrap();
    let without_coords = controller.render_current().unwrap();
    assert_eq!(without_coords.coordinates, "N/A");
    assert_eq!(without_coords.location, "Sydney, Unknown Unknown");
}

#[tokio::test]
async fn test_history_is_shared_across_sessions() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/8.8.8.8/json"))
            .respond_with(json_encoded(provider_body("8.8.8.8"))),
    );

    let dir = TempDir::new().unwrap();
    {
        let mut first = make_controller(&server, &dir);
        first.search("8.8.8.8").await.unwrap();
    }

    // A fresh controller over the same data directory sees the entry and
    // can replay it without any provider traffic
    let mut second = make_controller(&server, &dir);
    assert_eq!(second.history().len(), 1);
    second.select_history("8.8.8.8").unwrap();
    assert_eq!(second.current().unwrap().ip, "8.8.8.8");
}

#[tokio::test]
async fn test_replay_unknown_entry_is_an_error() {
    let server = Server::run();
    let dir = TempDir::new().unwrap();
    let mut controller = make_controller(&server, &dir);

    let err = controller.select_history("8.8.8.8").unwrap_err();
    assert!(matches!(err, AppError::UnknownHistoryEntry(_)));
    assert!(controller.current().is_none());
}
