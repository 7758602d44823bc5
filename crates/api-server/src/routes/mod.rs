//! Route handlers

pub mod board;
pub mod health;
pub mod list;
pub mod store;
pub mod task;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use taskboard_core::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { error: message.into() }))
}

pub fn not_found(kind: &str, id: u64) -> ApiError {
    error_response(StatusCode::NOT_FOUND, format!("{} {} not found", kind, id))
}

/// Map a store error onto an HTTP status
pub fn store_error(err: Error) -> ApiError {
    let status = match &err {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::BoardNotFound(_) | Error::ListNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, err.to_string())
}
