use serde::{Deserialize, Serialize};

use super::group_label::{GroupLabel, UniqueId};
use super::position::Position;

/// Provenance of a submitted plan, consumed once by the executor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionSignal {
    /// Id of the task that triggered the plan
    pub id: UniqueId,
    pub is_force: bool,
    pub is_global: bool,
    pub collection_id: UniqueId,
    pub partition_id: UniqueId,
    pub pos: Option<Position>,
}

impl CompactionSignal {
    /// Signal for a plan raised by a view trigger.
    pub fn for_view_trigger(task_id: UniqueId, label: &GroupLabel, pos: Option<Position>) -> Self {
        Self {
            id: task_id,
            is_force: false,
            is_global: true,
            collection_id: label.collection_id,
            partition_id: label.partition_id,
            pos,
        }
    }
}
