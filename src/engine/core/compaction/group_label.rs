use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Globally unique identifier issued by the id allocator.
pub type UniqueId = i64;

/// Key of one compaction group: segments of the same collection, partition and channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupLabel {
    pub collection_id: UniqueId,
    pub partition_id: UniqueId,
    pub channel: String,
}

impl GroupLabel {
    pub fn new(collection_id: UniqueId, partition_id: UniqueId, channel: impl Into<String>) -> Self {
        Self {
            collection_id,
            partition_id,
            channel: channel.into(),
        }
    }
}

impl Display for GroupLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "coll={}, part={}, channel={}",
            self.collection_id, self.partition_id, self.channel
        )
    }
}
