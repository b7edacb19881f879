//! HTTP surface tests driven through the router without a socket.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use petshop_gateway::{app_state::AppState, config, router};

const CONFIG: &str = r#"
version: 1
tenants:
  - id: "happy-paws"
    name: "Happy Paws"
    plan_type: premium
  - id: "corner-vet"
    plan_type: free
  - id: "bark-avenue"
    plan_type: premium
    subscription_status: canceled
"#;

fn app() -> Router {
    let cfg = config::load_from_str(CONFIG).unwrap();
    router::build_router(AppState::new(cfg))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = app();
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn plan_limits_by_id() {
    let app = app();
    let (status, v) = get_json(&app, "/v1/plans/free/limits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["max_clients"], 20);

    let (status, v) = get_json(&app, "/v1/plans/premium/limits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["max_pets"], "unlimited");

    let (status, v) = get_json(&app, "/v1/plans/gold/limits").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["code"], "UNKNOWN_PLAN");
    assert_eq!(v["message"], "unknown plan: gold");
}

#[tokio::test]
async fn tenant_entitlements_follow_effective_plan() {
    let app = app();
    let (status, v) = get_json(&app, "/v1/tenants/happy-paws/entitlements").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["tenant_id"], "happy-paws");
    assert_eq!(v["name"], "Happy Paws");
    assert_eq!(v["plan"], "premium");
    assert_eq!(v["limits"]["max_users"], "unlimited");

    let (_, v) = get_json(&app, "/v1/tenants/bark-avenue/entitlements").await;
    assert_eq!(v["plan_type"], "premium");
    assert_eq!(v["subscription_status"], "canceled");
    assert_eq!(v["plan"], "free");
    assert_eq!(v["features"], json!([]));
}

#[tokio::test]
async fn unknown_tenant_is_not_found() {
    let app = app();
    let (status, v) = get_json(&app, "/v1/tenants/nobody/entitlements").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["code"], "UNKNOWN_TENANT");
}

#[tokio::test]
async fn feature_access_per_tenant() {
    let app = app();
    let (_, v) = get_json(&app, "/v1/tenants/happy-paws/features/whatsapp").await;
    assert_eq!(v["allowed"], true);

    let (_, v) = get_json(&app, "/v1/tenants/corner-vet/features/reports").await;
    assert_eq!(v["allowed"], false);

    let (status, v) = get_json(&app, "/v1/tenants/happy-paws/features/telepathy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["allowed"], false);
}

#[tokio::test]
async fn limit_check_for_free_tenant() {
    let app = app();
    let uri = "/v1/tenants/corner-vet/limits/check";

    let (status, v) = post_json(&app, uri, json!({"resource": "clients", "current": 19})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["can_add"], true);
    assert_eq!(v["remaining"], 1);
    assert_eq!(v["limit"], 20);
    assert_eq!(v["resource"], "clients");

    let (_, v) = post_json(&app, uri, json!({"resource": "clients", "current": 20})).await;
    assert_eq!(v["can_add"], false);
    assert_eq!(v["remaining"], 0);

    let (status, v) = post_json(&app, uri, json!({"resource": "invoices", "current": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["code"], "UNKNOWN_RESOURCE");
}

#[tokio::test]
async fn limit_check_for_premium_tenant() {
    let app = app();
    let (_, v) = post_json(
        &app,
        "/v1/tenants/happy-paws/limits/check",
        json!({"resource": "pets", "current": 100000}),
    )
    .await;
    assert_eq!(v["can_add"], true);
    assert_eq!(v["remaining"], "unlimited");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/v1/appointments/transitions/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn transition_checks() {
    let app = app();
    let uri = "/v1/appointments/transitions/check";

    let (status, v) = post_json(
        &app,
        uri,
        json!({"from": "scheduled", "to": "confirmed", "role": "employee"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["allowed"], true);

    let (status, v) = post_json(
        &app,
        uri,
        json!({"from": "cancelled", "to": "scheduled", "role": "employee", "reason": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(v["code"], "FORBIDDEN_ROLE");

    let (status, v) = post_json(
        &app,
        uri,
        json!({"from": "cancelled", "to": "scheduled", "role": "owner"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["code"], "REASON_REQUIRED");

    let (status, v) = post_json(
        &app,
        uri,
        json!({"from": "completed", "to": "scheduled", "role": "owner", "reason": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["code"], "INVALID_TRANSITION");

    let (status, v) = post_json(
        &app,
        uri,
        json!({"from": "archived", "to": "scheduled", "role": "owner"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn next_statuses_for_role() {
    let app = app();
    let (status, v) = get_json(&app, "/v1/appointments/statuses/no_show/transitions?role=admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["to"], json!(["scheduled", "rescheduled"]));

    let (_, v) = get_json(&app, "/v1/appointments/statuses/no_show/transitions?role=employee").await;
    assert_eq!(v["to"], json!([]));

    let (status, v) = get_json(&app, "/v1/appointments/statuses/no_show/transitions").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn metrics_count_decisions() {
    let app = app();
    post_json(
        &app,
        "/v1/appointments/transitions/check",
        json!({"from": "completed", "to": "cancelled", "role": "owner"}),
    )
    .await;
    get_json(&app, "/v1/plans/free/limits").await;

    let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains(
        "petshop_decisions_total{kind=\"transition\",outcome=\"INVALID_TRANSITION\"} 1"
    ));
    assert!(text.contains("petshop_decisions_total{kind=\"plan_limits\",outcome=\"ok\"} 1"));
}

#[tokio::test]
async fn malformed_requests_are_counted() {
    let app = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/v1/appointments/transitions/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/v1/tenants/corner-vet/limits/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"resource": "clients"}"#))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/v1/appointments/statuses/no_show/transitions").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let (_, body) = send(&app, req).await;
    let text = String::from_utf8(body).unwrap();
    for kind in ["transition", "limit_check", "next_statuses"] {
        let line = format!("petshop_decisions_total{{kind=\"{kind}\",outcome=\"BAD_REQUEST\"}} 1");
        assert!(text.contains(&line), "missing {line} in:\n{text}");
    }
}
