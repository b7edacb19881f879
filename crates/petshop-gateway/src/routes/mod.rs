//! JSON handlers for entitlement and appointment decisions.
//!
//! Each handler records its outcome in the decision counters before
//! answering, so rejected decisions are visible on `/metrics`.

pub mod appointments;
pub mod entitlements;

use petshop_core::error::Result;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Count the outcome of a decision and lift errors into `ApiError`.
fn observe<T>(state: &AppState, kind: &str, res: Result<T>) -> std::result::Result<T, ApiError> {
    match res {
        Ok(v) => {
            state.metrics().record_decision(kind, "ok");
            Ok(v)
        }
        Err(e) => {
            let code = e.client_code();
            state.metrics().record_decision(kind, code.as_str());
            tracing::debug!(kind, code = code.as_str(), error = %e, "decision rejected");
            Err(ApiError(e))
        }
    }
}
