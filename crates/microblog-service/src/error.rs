use microblog_store::StoreError;
use thiserror::Error;

/// Errors returned by service operations.
///
/// `Validation`, `Conflict`, and `NotFound` are caller faults and are never
/// retried. `Unavailable` means the service has been closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Short machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::NotFound(_) => "not_found",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername { .. } => Self::conflict("username already exists"),
            StoreError::UnknownUser { .. } => Self::not_found("user not found"),
            StoreError::UnknownPost { .. } => Self::not_found("post not found"),
            StoreError::DuplicateLike { .. } => Self::conflict("post already liked"),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
