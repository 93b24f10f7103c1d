use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced to API clients as `{"message": ...}`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Path identifier does not have the storage identifier format
    #[error("{0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Forbidden(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn storage(err: anyhow::Error) -> Self {
        Self::Storage(single_line(&format!("{:#}", err)))
    }

    pub fn not_authorized() -> Self {
        Self::Forbidden("User is not authorized".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidIdentifier(_) | Self::Validation(_) | Self::Storage(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), "request failed: {}", self);
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(single_line(&rejection.body_text()))
    }
}

fn single_line(message: &str) -> String {
    message.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}
