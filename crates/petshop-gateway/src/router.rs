//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .route("/v1/plans/:plan/limits", get(routes::entitlements::plan_limits))
        .route(
            "/v1/tenants/:tenant/entitlements",
            get(routes::entitlements::tenant_entitlements),
        )
        .route(
            "/v1/tenants/:tenant/features/:feature",
            get(routes::entitlements::feature_access),
        )
        .route(
            "/v1/tenants/:tenant/limits/check",
            post(routes::entitlements::limit_check),
        )
        .route(
            "/v1/appointments/transitions/check",
            post(routes::appointments::check_transition),
        )
        .route(
            "/v1/appointments/statuses/:from/transitions",
            get(routes::appointments::next_statuses),
        )
        .with_state(state)
}
