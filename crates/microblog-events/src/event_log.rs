use std::path::{Path, PathBuf};

use microblog_pipeline::{Pipeline, PipelineConfig};
use microblog_types::{EventCategory, EventRecord};

use crate::config::EventLogConfig;
use crate::error::EventLogResult;
use crate::writer::{self, EventWriter, Secondary};

/// Producer handle for the event log worker.
///
/// Submission is decoupled from writing: [`EventLog::record`] returns once
/// the record is queued, and the worker writes it later. When the buffer is
/// full, `record` waits for room.
pub struct EventLog {
    path: PathBuf,
    pipeline: Pipeline<EventRecord>,
}

impl EventLog {
    /// Open the sink and start the worker, mirroring to stdout.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(config: &EventLogConfig) -> Self {
        Self::with_secondary(config, writer::stdout())
    }

    /// Like [`EventLog::start`] with a caller-supplied secondary output.
    pub fn with_secondary(config: &EventLogConfig, secondary: Secondary) -> Self {
        let writer = EventWriter::open(&config.path, secondary, config.mirror_stdout);
        let pipeline = Pipeline::spawn(PipelineConfig::new("event-log", config.capacity), writer);
        Self {
            path: config.path.clone(),
            pipeline,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Queue a record stamped with the current time.
    pub async fn record(
        &self,
        category: EventCategory,
        message: impl Into<String>,
    ) -> EventLogResult<()> {
        self.submit(EventRecord::new(category, message)).await
    }

    pub async fn submit(&self, record: EventRecord) -> EventLogResult<()> {
        Ok(self.pipeline.submit(record).await?)
    }

    /// Wait until every record queued so far has been written.
    pub async fn flush(&self) -> EventLogResult<()> {
        Ok(self.pipeline.flush().await?)
    }

    /// Stop intake and wait for the worker to write everything queued.
    pub async fn close(&self) -> EventLogResult<u64> {
        Ok(self.pipeline.close().await?)
    }

    pub fn is_closed(&self) -> bool {
        self.pipeline.is_closed()
    }
}
