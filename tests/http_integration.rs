//! HTTP integration tests
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`, using a
//! fixed clock and fake host metrics so responses are reproducible.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::DateTime;
use serde_json::Value;
use tower::ServiceExt;

use extra_placeholders::config::{PlaceholderConfig, RespondConfig, Settings};
use extra_placeholders::placeholder::{
    FixedClock, HostVersion, LoadAverage, PlaceholderProvider, StaticHostMetrics, UPTIME_ERROR,
};
use extra_placeholders::server::{create_app, placeholder_routes, AppState};

fn test_state(config: PlaceholderConfig, host: StaticHostMetrics) -> AppState {
    let local = DateTime::parse_from_rfc3339("2024-12-31T23:30:05-05:00").unwrap();
    let provider = PlaceholderProvider::new(
        config.clone(),
        HostVersion::new("v9.9.9", "v9.9.9 integration"),
        Arc::new(host),
        Arc::new(FixedClock::new(local, "EST")),
    );
    let settings = Settings {
        placeholders: config,
        respond: RespondConfig {
            body: "{extra.time.now.custom} {extra.time.now.utc.timezone_name} {extra.caddy.version.simple} {http.request.method}"
                .to_string(),
        },
        ..Settings::default()
    };
    AppState::with_provider(settings, provider)
}

fn healthy_host() -> StaticHostMetrics {
    StaticHostMetrics {
        load: Some(LoadAverage {
            one: 1.5,
            five: 1.0,
            fifteen: 0.5,
        }),
        uptime: Some(Duration::from_secs(90)),
    }
}

fn app() -> Router {
    create_app(test_state(PlaceholderConfig::default(), healthy_host()))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_respond_renders_template() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "2024-12-31 23:30:05 UTC v9.9.9 GET");
}

#[tokio::test]
async fn test_render_endpoint() {
    let req = Request::builder()
        .method("POST")
        .uri("/render")
        .body(Body::from(
            "{extra.time.now.hour_padded}:{extra.time.now.minute_padded} utc={extra.time.now.utc.hour_padded} up={extra.hostinfo.uptime} {unknown.key}",
        ))
        .unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "23:30 utc=04 up=1m30s {unknown.key}");
}

#[tokio::test]
async fn test_placeholders_listing() {
    let (status, json) = get_json(app(), "/placeholders?prefix=extra.").await;
    assert_eq!(status, StatusCode::OK);

    let map = json.as_object().unwrap();
    assert!(map.keys().all(|k| k.starts_with("extra.")));
    assert_eq!(map["extra.caddy.version.full"], "v9.9.9 integration");
    assert_eq!(map["extra.loadavg.1"], 1.5);
    assert_eq!(map["extra.time.now.iso_week"], 1);
    assert_eq!(map["extra.time.now.iso_year"], 2025);
    assert_eq!(map["extra.time.now.timezone_offset"], "-0500");
    assert_eq!(map["extra.time.now.utc.timezone_offset"], "+0000");

    let rand_int = map["extra.rand.int"].as_i64().unwrap();
    assert!((0..=100).contains(&rand_int));
    let rand_float = map["extra.rand.float"].as_f64().unwrap();
    assert!((0.0..1.0).contains(&rand_float));
}

#[tokio::test]
async fn test_listing_includes_request_keys() {
    let (_, json) = get_json(app(), "/placeholders").await;
    assert_eq!(json["http.request.uri.path"], "/placeholders");
    assert!(json.get("extra.hostinfo.uptime").is_some());
}

#[tokio::test]
async fn test_runtime_keys_reflect_serving_runtime() {
    let (_, json) = get_json(app(), "/placeholders?prefix=extra.tokio.").await;
    assert_eq!(json["extra.tokio.runtime.flavor"], "current_thread");
    assert_eq!(json["extra.tokio.runtime.workers"], 1);
    assert!(json["extra.tokio.runtime.alive_tasks"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn test_metric_failures_degrade() {
    let app = create_app(test_state(
        PlaceholderConfig::default(),
        StaticHostMetrics::unavailable(),
    ));
    let (status, json) = get_json(app, "/placeholders").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.get("extra.loadavg.1").is_none());
    assert!(json.get("extra.loadavg.5").is_none());
    assert!(json.get("extra.loadavg.15").is_none());
    assert_eq!(json["extra.hostinfo.uptime"], UPTIME_ERROR);
    assert_eq!(json["extra.time.now.utc.timezone_name"], "UTC");
}

#[tokio::test]
async fn test_configured_range_over_many_requests() {
    let config = PlaceholderConfig {
        rand_int_min: 20,
        rand_int_max: 22,
        ..PlaceholderConfig::default()
    };
    let app = create_app(test_state(config, healthy_host()));
    for _ in 0..50 {
        let (_, json) = get_json(app.clone(), "/placeholders?prefix=extra.rand").await;
        let v = json["extra.rand.int"].as_i64().unwrap();
        assert!((20..=22).contains(&v));
    }
}

#[tokio::test]
async fn test_missing_replacer_is_internal_error() {
    let state = test_state(PlaceholderConfig::default(), healthy_host());
    let app = placeholder_routes(&state).with_state(state);

    let (status, json) = get_json(app, "/placeholders").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_health_bypasses_placeholders() {
    let (status, json) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["loadavg_enabled"], true);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let _ = get_json(app(), "/placeholders").await;
    let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("extra_placeholders_computed_total"));
}
