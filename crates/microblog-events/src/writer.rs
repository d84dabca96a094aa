use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use microblog_pipeline::Handler;
use microblog_types::EventRecord;
use tracing::{error, info, warn};

use crate::error::EventLogError;

/// Secondary output, stdout in production.
pub type Secondary = Box<dyn Write + Send>;

/// The event log worker's handler: owns the sink file and the secondary
/// output for the lifetime of the worker.
pub struct EventWriter {
    path: PathBuf,
    file: Option<File>,
    secondary: Secondary,
    mirror: bool,
}

impl EventWriter {
    /// Open `path` for appending. Failure to open is logged and leaves the
    /// writer in degraded mode rather than returning an error.
    pub fn open(path: &Path, secondary: Secondary, mirror: bool) -> Self {
        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                info!(path = %path.display(), "event log opened");
                Some(file)
            }
            Err(err) => {
                error!(
                    path = %path.display(),
                    error = %err,
                    "failed to open event log; events go to the secondary output only"
                );
                None
            }
        };

        Self::with_file(path, file, secondary, mirror)
    }

    /// Wrap an already opened sink; `None` starts in degraded mode.
    pub fn with_file(path: &Path, file: Option<File>, secondary: Secondary, mirror: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            file,
            secondary,
            mirror,
        }
    }

    /// `true` when the sink file could not be opened.
    pub fn is_degraded(&self) -> bool {
        self.file.is_none()
    }

    fn write_record(&mut self, record: &EventRecord) -> Result<(), EventLogError> {
        let line = record.line();

        let Some(file) = self.file.as_mut() else {
            writeln!(self.secondary, "[LOGGER ERROR] {}: {}", record.category, record.message)?;
            return Ok(());
        };

        if self.mirror {
            if let Err(err) = writeln!(self.secondary, "{line}") {
                warn!(error = %err, "failed to mirror event line");
            }
        }

        writeln!(file, "{} {line}", record.timestamp.format("%Y/%m/%d %H:%M:%S"))?;
        Ok(())
    }
}

#[async_trait]
impl Handler<EventRecord> for EventWriter {
    type Error = EventLogError;

    async fn handle(&mut self, record: EventRecord) -> Result<(), EventLogError> {
        self.write_record(&record)
    }

    async fn finish(&mut self) {
        if let Some(file) = self.file.as_mut() {
            if let Err(err) = file.flush().and_then(|_| file.sync_data()) {
                warn!(path = %self.path.display(), error = %err, "failed to sync event log");
            }
        }
        let _ = self.secondary.flush();
    }
}

/// Stdout as a boxed secondary output.
pub fn stdout() -> Secondary {
    Box::new(io::stdout())
}
