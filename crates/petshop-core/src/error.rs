//! Shared error type across petshop crates.

use thiserror::Error;

use crate::appointment::{AppointmentStatus, Role};

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Plan identifier not in the plan table.
    UnknownPlan,
    /// Countable resource name not recognised.
    UnknownResource,
    /// Destination status not reachable from the current one.
    InvalidTransition,
    /// Role may not perform this transition.
    ForbiddenRole,
    /// Transition needs a non-empty reason.
    ReasonRequired,
    /// Tenant id not known to the directory.
    UnknownTenant,
    /// Invalid input / malformed request.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::UnknownPlan => "UNKNOWN_PLAN",
            ClientCode::UnknownResource => "UNKNOWN_RESOURCE",
            ClientCode::InvalidTransition => "INVALID_TRANSITION",
            ClientCode::ForbiddenRole => "FORBIDDEN_ROLE",
            ClientCode::ReasonRequired => "REASON_REQUIRED",
            ClientCode::UnknownTenant => "UNKNOWN_TENANT",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PetShopError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PetShopError {
    #[error("unknown plan: {0}")]
    UnknownPlan(String),
    #[error("unknown resource type: {0}")]
    UnknownResource(String),
    #[error("cannot move an appointment from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
    #[error("role {role} may not change an appointment that is {from}")]
    ForbiddenRole {
        role: Role,
        from: AppointmentStatus,
    },
    #[error("a reason is required to move an appointment from {from} to {to}")]
    ReasonRequired {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
    #[error("unknown tenant: {0}")]
    UnknownTenant(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PetShopError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PetShopError::UnknownPlan(_) => ClientCode::UnknownPlan,
            PetShopError::UnknownResource(_) => ClientCode::UnknownResource,
            PetShopError::InvalidTransition { .. } => ClientCode::InvalidTransition,
            PetShopError::ForbiddenRole { .. } => ClientCode::ForbiddenRole,
            PetShopError::ReasonRequired { .. } => ClientCode::ReasonRequired,
            PetShopError::UnknownTenant(_) => ClientCode::UnknownTenant,
            PetShopError::BadRequest(_) => ClientCode::BadRequest,
            PetShopError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            PetShopError::Internal(_) => ClientCode::Internal,
        }
    }
}
