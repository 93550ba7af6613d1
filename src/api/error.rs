//! API error type. Every failure becomes a status code plus `{"error": message}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::TraceError;
use crate::model::ModelError;
use crate::transaction::TransactionError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body shape or field violations (400)
    #[error("{0}")]
    BadRequest(String),

    /// Model or runtime failure (500)
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Internal(message) => tracing::error!(error = %message, "request failed"),
            Self::BadRequest(message) => tracing::debug!(error = %message, "request rejected"),
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<TraceError> for ApiError {
    fn from(e: TraceError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<TransactionError> for ApiError {
    fn from(e: TransactionError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Internal(e.to_string())
    }
}
