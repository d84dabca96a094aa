use thiserror::Error;

/// Errors returned to pipeline producers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The pipeline no longer accepts items.
    #[error("pipeline {pipeline} is closed")]
    Closed { pipeline: String },

    /// The worker task panicked or was aborted.
    #[error("pipeline {pipeline} worker failed: {reason}")]
    WorkerFailed { pipeline: String, reason: String },

    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
