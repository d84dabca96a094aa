use serde::{Deserialize, Serialize};

/// Buffer size used when none is configured.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Name used in log output and errors.
    pub name: String,
    /// Number of items buffered before producers have to wait.
    pub capacity: usize,
}

impl PipelineConfig {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_CAPACITY)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::named("pipeline")
    }
}
