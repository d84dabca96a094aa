use microblog_pipeline::PipelineError;

/// Errors produced by the event log.
#[derive(Debug, thiserror::Error)]
pub enum EventLogError {
    /// The underlying queue rejected the record (usually: closed).
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Writing a line to the sink failed.
    #[error("failed to write event line: {0}")]
    Write(#[from] std::io::Error),
}

pub type EventLogResult<T> = Result<T, EventLogError>;
