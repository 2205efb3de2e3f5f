use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use super::group_label::{GroupLabel, UniqueId};
use super::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentLevel {
    Legacy,
    L0,
    L1,
    L2,
}

impl Display for SegmentLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SegmentLevel::Legacy => "Legacy",
            SegmentLevel::L0 => "L0",
            SegmentLevel::L1 => "L1",
            SegmentLevel::L2 => "L2",
        };
        f.write_str(name)
    }
}

/// Read-only snapshot of one segment as seen by a compaction view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentView {
    pub id: UniqueId,
    pub label: GroupLabel,
    pub level: SegmentLevel,
    pub start_pos: Option<Position>,
    /// Latest DML position covered by this segment
    pub dml_pos: Option<Position>,
    pub size_bytes: u64,
    pub num_rows: u64,
    pub delta_size_bytes: u64,
    pub deltalog_count: usize,
}

impl Display for SegmentView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "id={}, level={}, size={}, delta_size={}, deltalogs={}",
            self.id, self.level, self.size_bytes, self.delta_size_bytes, self.deltalog_count
        )
    }
}
