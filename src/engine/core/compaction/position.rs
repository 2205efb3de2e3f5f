use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Position in a channel's message stream, ordered by timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub channel: String,
    pub timestamp: u64,
}

impl Position {
    pub fn new(channel: impl Into<String>, timestamp: u64) -> Self {
        Self {
            channel: channel.into(),
            timestamp,
        }
    }

    /// True when this position lies strictly before `other`.
    #[inline]
    pub fn is_before(&self, other: &Position) -> bool {
        self.timestamp < other.timestamp
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.channel, self.timestamp)
    }
}
