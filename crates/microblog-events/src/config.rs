use std::path::PathBuf;

use microblog_pipeline::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventLogConfig {
    /// Append-only file receiving one line per event.
    pub path: PathBuf,
    /// Records buffered before submitters have to wait.
    pub capacity: usize,
    /// Also print every line to the secondary output.
    pub mirror_stdout: bool,
}

impl EventLogConfig {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("events.log"),
            capacity: DEFAULT_CAPACITY,
            mirror_stdout: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = EventLogConfig::default();
        assert_eq!(c.path, PathBuf::from("events.log"));
        assert_eq!(c.capacity, 100);
        assert!(c.mirror_stdout);
    }

    #[test]
    fn at_overrides_path_only() {
        let c = EventLogConfig::at("/tmp/audit.log");
        assert_eq!(c.path, PathBuf::from("/tmp/audit.log"));
        assert_eq!(c.capacity, 100);
    }
}
