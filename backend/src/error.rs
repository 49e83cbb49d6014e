use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{ErrorResponse, ValidationError};
use thiserror::Error;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to send tasks to webhook";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// Failures of the email relay. Detail stays in the logs; callers only see
/// the generic message for each kind.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("unreadable request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("invalid request body: {0}")]
    Validation(#[from] ValidationError),

    #[error("webhook responded with {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Body(rejection) => rejection.status(),
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::Body(_) | RelayError::Validation(_) => INVALID_BODY_MESSAGE,
            RelayError::Upstream { .. } => UPSTREAM_FAILURE_MESSAGE,
            RelayError::Transport(_) => UNEXPECTED_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}
