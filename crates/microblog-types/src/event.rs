use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of event log records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    /// A user registered.
    Register,
    /// A post was created.
    PostCreated,
    /// A like was applied to a post.
    Like,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "REGISTER",
            Self::PostCreated => "POST_CREATED",
            Self::Like => "LIKE",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single record flowing through the event log.
///
/// Timestamps are UTC, and rendered lines show UTC wall-clock time rather
/// than the host's local zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub category: EventCategory,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl EventRecord {
    /// Build a record stamped with the current wall-clock time.
    pub fn new(category: EventCategory, message: impl Into<String>) -> Self {
        Self::at(category, message, Utc::now())
    }

    pub fn at(category: EventCategory, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            category,
            message: message.into(),
            timestamp,
        }
    }

    /// `[HH:MM:SS] CATEGORY: message`, time of day in UTC.
    pub fn line(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.category,
            self.message
        )
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}
