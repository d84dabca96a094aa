use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use microblog_service::ServiceError;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    #[error("shutdown timed out after {0}s")]
    ShutdownTimeout(u64),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// A failed request, rendered as a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body")]
    InvalidBody,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Service(err) => match err {
                ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::Conflict(_) => StatusCode::CONFLICT,
                ServiceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = match &self {
            ApiError::InvalidBody => "invalid_body",
            ApiError::Service(err) => err.kind(),
        };
        debug!(kind, error = %self, "request failed");
        (self.status_code(), self.to_string()).into_response()
    }
}
