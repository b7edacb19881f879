use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use petshop_core::entitlement::{
    limits_for_id, CountCheck, Entitlements, Plan, PlanLimits, ResourceType, SubscriptionStatus,
};
use petshop_core::error::Result;

use crate::app_state::AppState;
use crate::context::resolve_tenant;
use crate::error::{body_rejected, ApiError};

use super::observe;

/// `GET /v1/plans/:plan/limits`
pub async fn plan_limits(
    State(state): State<AppState>,
    Path(plan): Path<String>,
) -> std::result::Result<Json<PlanLimits>, ApiError> {
    let limits = observe(&state, "plan_limits", limits_for_id(&plan))?;
    Ok(Json(limits))
}

#[derive(Debug, Serialize)]
pub struct TenantEntitlements {
    pub tenant_id: String,
    pub name: String,
    pub plan_type: Plan,
    pub subscription_status: SubscriptionStatus,
    #[serde(flatten)]
    pub entitlements: Entitlements,
}

/// `GET /v1/tenants/:tenant/entitlements`
pub async fn tenant_entitlements(
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
) -> std::result::Result<Json<TenantEntitlements>, ApiError> {
    let ctx = observe(&state, "entitlements", resolve_tenant(&state, &tenant_id).await)?;
    Ok(Json(TenantEntitlements {
        tenant_id: ctx.tenant.id,
        name: ctx.tenant.name,
        plan_type: ctx.tenant.plan_type,
        subscription_status: ctx.tenant.subscription_status,
        entitlements: ctx.entitlements,
    }))
}

#[derive(Debug, Serialize)]
pub struct FeatureAccess {
    pub tenant_id: String,
    pub plan: Plan,
    pub feature: String,
    pub allowed: bool,
}

/// `GET /v1/tenants/:tenant/features/:feature`
pub async fn feature_access(
    State(state): State<AppState>,
    Path((tenant_id, feature)): Path<(String, String)>,
) -> std::result::Result<Json<FeatureAccess>, ApiError> {
    let res = resolve_tenant(&state, &tenant_id).await.map(|ctx| FeatureAccess {
        allowed: ctx.entitlements.can_access(&feature),
        plan: ctx.plan(),
        tenant_id: ctx.tenant.id,
        feature,
    });
    Ok(Json(observe(&state, "feature", res)?))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitCheckRequest {
    pub resource: String,
    pub current: u64,
}

#[derive(Debug, Serialize)]
pub struct LimitCheckResponse {
    pub tenant_id: String,
    pub plan: Plan,
    pub resource: ResourceType,
    #[serde(flatten)]
    pub check: CountCheck,
}

async fn check_limit(
    state: &AppState,
    tenant_id: &str,
    req: LimitCheckRequest,
) -> Result<LimitCheckResponse> {
    let ctx = resolve_tenant(state, tenant_id).await?;
    let resource: ResourceType = req.resource.parse()?;
    Ok(LimitCheckResponse {
        check: ctx.entitlements.check(resource, req.current),
        plan: ctx.plan(),
        tenant_id: ctx.tenant.id,
        resource,
    })
}

/// `POST /v1/tenants/:tenant/limits/check`
///
/// Advisory only: the caller re-validates when it actually creates the record.
pub async fn limit_check(
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
    body: std::result::Result<Json<LimitCheckRequest>, JsonRejection>,
) -> std::result::Result<Json<LimitCheckResponse>, ApiError> {
    let res = match body {
        Ok(Json(req)) => check_limit(&state, &tenant_id, req).await,
        Err(rej) => Err(body_rejected(rej)),
    };
    Ok(Json(observe(&state, "limit_check", res)?))
}
