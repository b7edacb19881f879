//! HTTP mapping of `PetShopError`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use petshop_core::error::ClientCode;
use petshop_core::PetShopError;

/// Error returned by handlers: a `PetShopError` rendered as a JSON body.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub PetShopError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

/// HTTP status answered for a client code.
pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::ForbiddenRole => StatusCode::FORBIDDEN,
        ClientCode::UnknownTenant => StatusCode::NOT_FOUND,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        ClientCode::UnknownPlan
        | ClientCode::UnknownResource
        | ClientCode::InvalidTransition
        | ClientCode::ReasonRequired
        | ClientCode::BadRequest
        | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let message = self.0.to_string();
        let body = ErrorBody {
            code: code.as_str(),
            message: &message,
        };
        (status_for(code), Json(body)).into_response()
    }
}

/// Malformed JSON body as a decision failure.
pub fn body_rejected(rej: JsonRejection) -> PetShopError {
    PetShopError::BadRequest(rej.body_text())
}

/// Malformed query string as a decision failure.
pub fn query_rejected(rej: QueryRejection) -> PetShopError {
    PetShopError::BadRequest(rej.body_text())
}
