use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures surfaced to API clients. The message is all the client sees.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("URL parameter is required")]
    MissingUrl,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Failed to parse news article")]
    ParseFailed(#[source] ok_core::Error),

    #[error("Internal server error")]
    Internal(#[source] ok_core::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::ParseFailed(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::ParseFailed(source) | ApiError::Internal(source) => {
                tracing::error!(error = %source, "Error parsing news");
            }
            _ => tracing::debug!(error = %self, "Rejected request"),
        }

        let body = ErrorBody {
            ok: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
