use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a registered user, e.g. `user_1`.
///
/// Store-issued ids are always derived from an ordinal via
/// [`UserId::from_ordinal`]. Ids arriving from callers are wrapped verbatim
/// with [`UserId::new`] and may name nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub const PREFIX: &'static str = "user_";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn from_ordinal(ordinal: u64) -> Self {
        Self(format!("{}{ordinal}", Self::PREFIX))
    }

    /// The ordinal this id was derived from, if it has the store's shape.
    pub fn ordinal(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Identity of a post, e.g. `post_1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub const PREFIX: &'static str = "post_";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn from_ordinal(ordinal: u64) -> Self {
        Self(format!("{}{ordinal}", Self::PREFIX))
    }

    pub fn ordinal(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for PostId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for UserId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<String> for PostId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PostId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
