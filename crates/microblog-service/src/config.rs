use microblog_events::EventLogConfig;
use microblog_pipeline::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Validated likes buffered before `like_post` has to wait.
    pub like_queue_capacity: usize,
    pub events: EventLogConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            like_queue_capacity: DEFAULT_CAPACITY,
            events: EventLogConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServiceConfig::default();
        assert_eq!(c.like_queue_capacity, 100);
        assert_eq!(c.events, EventLogConfig::default());
    }
}
