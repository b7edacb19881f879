use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use petshop_core::appointment::{allowed_transitions, can_transition, AppointmentStatus, Role};
use petshop_core::error::Result;

use crate::app_state::AppState;
use crate::error::{body_rejected, query_rejected, ApiError};

use super::observe;

/// Statuses and role arrive as plain strings so that unknown values come back
/// as `BAD_REQUEST` bodies rather than extractor rejections.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionRequest {
    pub from: String,
    pub to: String,
    pub role: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TransitionVerdict {
    pub allowed: bool,
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,
}

fn decide(req: &TransitionRequest) -> Result<TransitionVerdict> {
    let from: AppointmentStatus = req.from.parse()?;
    let to: AppointmentStatus = req.to.parse()?;
    let role: Role = req.role.parse()?;
    can_transition(from, to, role, req.reason.as_deref())?;
    Ok(TransitionVerdict { allowed: true, from, to })
}

/// `POST /v1/appointments/transitions/check`
pub async fn check_transition(
    State(state): State<AppState>,
    body: std::result::Result<Json<TransitionRequest>, JsonRejection>,
) -> std::result::Result<Json<TransitionVerdict>, ApiError> {
    let res = body.map_err(body_rejected).and_then(|Json(req)| decide(&req));
    Ok(Json(observe(&state, "transition", res)?))
}

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct NextStatuses {
    pub from: AppointmentStatus,
    pub role: Role,
    pub to: Vec<AppointmentStatus>,
}

fn next_for(from: &str, role: &str) -> Result<NextStatuses> {
    let from: AppointmentStatus = from.parse()?;
    let role: Role = role.parse()?;
    Ok(NextStatuses {
        from,
        role,
        to: allowed_transitions(from, role),
    })
}

/// `GET /v1/appointments/statuses/:from/transitions?role=...`
pub async fn next_statuses(
    State(state): State<AppState>,
    Path(from): Path<String>,
    query: std::result::Result<Query<RoleQuery>, QueryRejection>,
) -> std::result::Result<Json<NextStatuses>, ApiError> {
    let res = query
        .map_err(query_rejected)
        .and_then(|Query(q)| next_for(&from, &q.role));
    Ok(Json(observe(&state, "next_statuses", res)?))
}
