use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Request-level failure. Translated to a status code only at the HTTP boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range request parameters
    #[error("{0}")]
    InvalidInput(String),

    /// Referenced user does not exist in the store
    #[error("{0}")]
    NotFound(String),

    /// Store, model or runtime failure. Details stay server-side.
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::Internal(anyhow::Error::new(e).context("store query failed"))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            Self::InvalidInput(msg) | Self::NotFound(msg) => {
                warn!(status = %status, "{}", msg);
                msg.clone()
            }
            Self::Internal(e) => {
                error!(error = ?e, "request failed");
                "Internal Server Error".to_string()
            }
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
