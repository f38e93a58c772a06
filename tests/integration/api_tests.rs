//! API integration tests
//!
//! Drive the router in-process against a fresh in-memory registry.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio_test::assert_ok;
use tower::ServiceExt;

use equipment_tracker::{api, config::AppConfig, AppState};

const ADMIN_PIN: &str = "2468";

fn app() -> Router {
    let mut config = AppConfig::default();
    config.tracker.admin_pin = Some(ADMIN_PIN.to_string());
    api::create_router(AppState::new(config))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    pin: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri))
        .header("content-type", "application/json");
    if let Some(pin) = pin {
        builder = builder.header(api::ADMIN_PIN_HEADER, pin);
    }
    let body = match body {
        Some(value) => Body::from(serde_json::to_vec(&value).expect("serialize body")),
        None => Body::empty(),
    };
    let request = builder.body(body).expect("build request");

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse body")
    };
    (status, value)
}

async fn create(app: &Router, id: &str, category: &str, system: Option<&str>) {
    let (status, _) = send(
        app,
        "POST",
        "/equipment",
        Some(json!({
            "id": id,
            "name": format!("Item {}", id),
            "category": category,
            "system_color": system,
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_registry_counts() {
    let app = app();
    create(&app, "EQ-1", "Pumps", None).await;
    create(&app, "EQ-2", "Pumps", None).await;
    let (status, _) = send(
        &app,
        "POST",
        "/equipment/EQ-2/check-out",
        Some(json!({ "work_order": "WO-1", "holder_name": "Tech A" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["equipment"]["total"], 2);
    assert_eq!(body["equipment"]["checked_out"], 1);
    assert_eq!(body["systems"], 4);
}

#[tokio::test]
async fn test_create_duplicate_and_missing_fields() {
    let app = app();
    create(&app, "EQ-1", "Pumps", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/equipment",
        Some(json!({ "id": "EQ-1", "name": "Again", "category": "Pumps" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (status, _) = send(
        &app,
        "POST",
        "/equipment",
        Some(json!({ "id": "EQ-2", "name": "", "category": "Pumps" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_out_check_in_broken_flow() {
    let app = app();
    create(&app, "EQ-100", "Pumps", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/equipment/EQ-100/check-out",
        Some(json!({ "work_order": "WO-1", "holder_name": "Tech A" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "checked_out");
    assert_eq!(body["work_order"], "WO-1");
    assert_eq!(body["checked_out_by"], "Tech A");
    assert_eq!(body["history"][0]["action"], "check_out");

    let (status, body) = send(
        &app,
        "POST",
        "/equipment/EQ-100/check-out",
        Some(json!({ "work_order": "WO-2", "holder_name": "Tech B" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "InvalidTransition");

    let (status, body) = send(
        &app,
        "POST",
        "/equipment/EQ-100/check-in",
        Some(json!({ "notes": "leak found", "is_broken": true })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "broken");
    assert_eq!(body["notes"], "leak found");
    assert!(body["work_order"].is_null());
    assert!(body["checked_out_by"].is_null());
    assert!(body["checked_out_at"].is_null());

    let (_, history) = send(&app, "GET", "/equipment/EQ-100/history", None, None).await;
    assert_eq!(history.as_array().map(Vec::len), Some(2));
    assert_eq!(history[0]["action"], "report_broken");
}

#[tokio::test]
async fn test_repair_requires_admin_pin() {
    let app = app();
    create(&app, "EQ-5", "Pumps", None).await;
    send(
        &app,
        "POST",
        "/equipment/EQ-5/check-out",
        Some(json!({ "work_order": "WO-1", "holder_name": "Tech A" })),
        None,
    )
    .await;
    send(
        &app,
        "POST",
        "/equipment/EQ-5/check-in",
        Some(json!({ "is_broken": true })),
        None,
    )
    .await;

    let (status, _) = send(&app, "POST", "/equipment/EQ-5/repair", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "POST",
        "/equipment/EQ-5/repair",
        Some(json!({})),
        Some("0000"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        "POST",
        "/equipment/EQ-5/repair",
        Some(json!({ "notes": "seal replaced" })),
        Some(ADMIN_PIN),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "available");
    assert_eq!(body["history"][0]["action"], "maintenance");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = app();
    create(&app, "X1", "C", None).await;

    let (status, _) = send(&app, "DELETE", "/equipment/X1", None, Some(ADMIN_PIN)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", "/equipment/X1", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchItem");
}

#[tokio::test]
async fn test_system_checkout_with_swap_and_work_order_check_in() {
    let app = app();
    create(&app, "P1", "Pumps", Some("Blue")).await;
    create(&app, "P2", "Pumps", None).await;
    create(&app, "H1", "Hoses", Some("Red")).await;
    create(&app, "M1", "Meters", None).await;

    let (status, candidates) = send(&app, "GET", "/equipment/P1/replacements", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(candidates[0]["id"], "P2");

    let (status, report) = send(
        &app,
        "POST",
        "/systems/Blue/check-out",
        Some(json!({
            "work_order": "WO-9",
            "holder_name": "Crew 3",
            "items": [
                { "original_id": "P1", "replacement_id": "P2" },
                { "original_id": "H1" },
                { "original_id": "GHOST" }
            ]
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["succeeded"], json!(["P2", "H1"]));
    assert_eq!(report["failed"][0]["id"], "GHOST");
    assert_eq!(report["slots"][0]["substituted"], true);

    let (_, h1) = send(&app, "GET", "/equipment/H1", None, None).await;
    assert_eq!(h1["system_color"], "Blue");

    let (_, active) = send(&app, "GET", "/work-orders/WO-9", None, None).await;
    assert_eq!(active.as_array().map(Vec::len), Some(2));

    let (status, report) = send(
        &app,
        "POST",
        "/work-orders/WO-9/check-in",
        Some(json!({ "reports": { "H1": { "notes": "kinked", "is_broken": true } } })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["succeeded"].as_array().map(Vec::len), Some(2));

    let (_, p2) = send(&app, "GET", "/equipment/P2", None, None).await;
    assert_eq!(p2["status"], "available");
    let (_, h1) = send(&app, "GET", "/equipment/H1", None, None).await;
    assert_eq!(h1["status"], "broken");

    let (status, _) = send(&app, "POST", "/work-orders/WO-9/check-in", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_import_and_systems_catalog() {
    let app = app();

    let (status, report) = send(
        &app,
        "POST",
        "/equipment/import",
        Some(json!([
            { "id": "A1", "name": "Pump", "category": "Pumps", "systemColor": "Green" },
            { "id": "A1", "name": "Pump again", "category": "Pumps" },
            { "id": "A2", "name": "Hose", "category": "Hoses", "system_color": "Green" }
        ])),
        Some(ADMIN_PIN),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["succeeded"], json!(["A1", "A2"]));
    assert_eq!(report["failed"][0]["code"], "Duplicate");

    let (_, systems) = send(&app, "GET", "/systems", None, None).await;
    let green = systems
        .as_array()
        .and_then(|all| all.iter().find(|s| s["name"] == "Green"))
        .cloned()
        .expect("Green system seeded");
    assert_eq!(green["member_count"], 2);

    let (status, _) = send(
        &app,
        "POST",
        "/systems",
        Some(json!({ "name": "Green", "color": "#00ff00" })),
        Some(ADMIN_PIN),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, members) = send(&app, "GET", "/systems/Green/equipment", None, None).await;
    assert_eq!(members.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_scan_resolves_known_and_unknown_ids() {
    let app = app();
    create(&app, "EQ-42", "Meters", None).await;

    let (status, body) = send(&app, "POST", "/scan", Some(json!({ "code": "EQ-42" })), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["equipment"]["id"], "EQ-42");

    let (status, body) = send(
        &app,
        "POST",
        "/scan",
        Some(json!({
            "code": r#"{"id":"EQ-43","name":"Gauge","category":"Gauges","systemColor":"Red"}"#
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["draft"]["system_color"], "Red");
}

#[tokio::test]
async fn test_update_clears_system_tag() {
    let app = app();
    create(&app, "EQ-7", "Pumps", Some("Blue")).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/equipment/EQ-7",
        Some(json!({ "name": "Spare pump", "system_color": null })),
        Some(ADMIN_PIN),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Spare pump");
    assert!(body["system_color"].is_null());
    assert_eq!(body["status"], "available");
}

#[tokio::test]
async fn test_state_is_shared_through_services() {
    let state = AppState::new(AppConfig::default());
    let created = state
        .services
        .equipment
        .create(equipment_tracker::models::CreateEquipment {
            id: "S1".into(),
            name: "Sensor".into(),
            category: "Sensors".into(),
            system_color: None,
        })
        .await;
    assert_ok!(created);

    let app = api::create_router(state);
    let (status, body) = send(&app, "GET", "/equipment?status=available", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "S1");
}
