mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use stats_gateway::api::routes::api_routes;
use stats_gateway::application::services::GatewaySettings;
use stats_gateway::state::AppState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::StubStorage;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new().nest("/api", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_team_stats_from_scraper() {
    let scraper = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scrape/team/spain/Real%20Madrid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": common::team_payload("Real Madrid"),
        })))
        .expect(1)
        .mount(&scraper)
        .await;

    let state = common::create_test_state(
        &scraper.uri(),
        StubStorage::Healthy,
        common::test_settings(),
    );
    let server = test_server(state);

    let response = server.get("/api/stats/team/laliga/Real%20Madrid").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "upstream");
    assert_eq!(json["data"]["teamName"], "Real Madrid");
    assert_eq!(json["data"]["points"], 33);
    assert!(json["duration"].is_u64());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_team_stats_unknown_league_passes_through() {
    let scraper = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scrape/team/portugal/Benfica"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": common::team_payload("Benfica"),
        })))
        .expect(1)
        .mount(&scraper)
        .await;

    let state = common::create_test_state(
        &scraper.uri(),
        StubStorage::Healthy,
        common::test_settings(),
    );
    let server = test_server(state);

    let response = server.get("/api/stats/team/portugal/Benfica").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["data"]["teamName"], "Benfica");
}

#[tokio::test]
async fn test_team_stats_scraper_down_serves_fallback() {
    let state = common::create_test_state(
        &common::refused_url(),
        StubStorage::Healthy,
        common::test_settings(),
    );
    let server = test_server(state);

    let response = server.get("/api/stats/team/laliga/Barcelona").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "fallback");
    assert_eq!(json["data"]["teamName"], "Barcelona");
    assert_eq!(json["data"]["league"], "LALIGA");
    assert_eq!(json["data"]["wins"], 11);
    assert_eq!(json["data"]["draws"], 2);
    assert_eq!(json["data"]["losses"], 2);
    assert_eq!(json["data"]["matchesPlayed"], 15);
    assert_eq!(json["data"]["goalDifference"], 23);
    assert_eq!(json["data"]["form"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_team_stats_fallback_keeps_requested_name() {
    let state = common::create_test_state(
        &common::refused_url(),
        StubStorage::Healthy,
        common::test_settings(),
    );
    let server = test_server(state);

    let response = server.get("/api/stats/team/laliga/Osasuna").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "fallback");
    assert_eq!(json["data"]["teamName"], "Osasuna");
    assert_eq!(json["data"]["points"], 35);
}

#[tokio::test]
async fn test_team_stats_blank_team_is_rejected() {
    let scraper = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&scraper)
        .await;

    let state = common::create_test_state(
        &scraper.uri(),
        StubStorage::Healthy,
        common::test_settings(),
    );
    let server = test_server(state);

    let response = server.get("/api/stats/team/laliga/%20").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "invalid_request");
    assert!(json["duration"].is_u64());
}

#[tokio::test]
async fn test_team_stats_not_found_keeps_scraper_message() {
    let scraper = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scrape/team/spain/Foo"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Equipo 'Foo' no encontrado en spain",
            "available_teams": ["Barcelona", "Girona"],
        })))
        .mount(&scraper)
        .await;

    let state = common::create_test_state(
        &scraper.uri(),
        StubStorage::Healthy,
        common::test_settings(),
    );
    let server = test_server(state);

    let response = server.get("/api/stats/team/laliga/Foo").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "upstream_rejected");
    assert_eq!(json["message"], "Equipo 'Foo' no encontrado en spain");
    assert_eq!(json["details"]["upstreamStatus"], 404);
    assert_eq!(json["details"]["availableTeams"], json!(["Barcelona", "Girona"]));
}

#[tokio::test]
async fn test_team_stats_scraper_down_without_fallback() {
    let settings = GatewaySettings {
        fallback_enabled: false,
        ..common::test_settings()
    };
    let state =
        common::create_test_state(&common::refused_url(), StubStorage::Healthy, settings);
    let server = test_server(state);

    let response = server.get("/api/stats/team/laliga/Barcelona").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "upstream_unavailable");
    assert_eq!(json["details"]["kind"], "unreachable");
}

#[tokio::test]
async fn test_missing_team_segment_gets_error_envelope() {
    let state = common::create_test_state(
        &common::refused_url(),
        StubStorage::Healthy,
        common::test_settings(),
    );
    let server = test_server(state);

    let response = server.get("/api/stats/team/laliga").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["details"]["path"], "/api/stats/team/laliga");
    assert!(json["duration"].is_u64());
}
