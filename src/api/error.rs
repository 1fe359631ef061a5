//! API error responses
//!
//! Every failure is rendered as `{"success": false, "error": "..."}`. An empty
//! export and a rejected budget or income body are client errors; everything
//! else is reported as a server error.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::error::ExpenseError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Tracker(#[from] ExpenseError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Nothing to export is user-facing; everything else from the
            // tracker, validation included, is a failed operation.
            ApiError::Tracker(ExpenseError::Export(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Tracker(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = Json(FailureBody {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
