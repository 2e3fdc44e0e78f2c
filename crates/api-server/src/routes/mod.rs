//! Route handlers

pub mod health;
pub mod task;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type RouteError = (StatusCode, Json<ErrorResponse>);

/// Map a core error onto the status the presentation layer expects
pub fn route_error(error: upcoming_core::Error) -> RouteError {
    let status = match &error {
        upcoming_core::Error::Validation(_) => StatusCode::BAD_REQUEST,
        upcoming_core::Error::TaskNotFound(_) => StatusCode::NOT_FOUND,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

/// Reject a request with 400 and a JSON error body
pub fn bad_request(error: impl std::fmt::Display) -> RouteError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

/// Unwrap a JSON body, turning axum's plain-text rejection into an `ErrorResponse`
pub fn json_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, RouteError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| bad_request(rejection.body_text()))
}
