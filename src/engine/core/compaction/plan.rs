use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use super::group_label::UniqueId;
use super::segment_view::SegmentLevel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompactionType {
    /// Merge level-zero delete records into the sealed segments they target
    Level0DeleteCompaction,
    /// Merge several undersized segments into one
    MixCompaction,
}

impl Display for CompactionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CompactionType::Level0DeleteCompaction => "Level0DeleteCompaction",
            CompactionType::MixCompaction => "MixCompaction",
        };
        f.write_str(name)
    }
}

/// Log files of one field, filled in by the executor right before a plan runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinlog {
    pub field_id: i64,
    pub log_paths: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionSegmentBinlogs {
    pub segment_id: UniqueId,
    pub level: SegmentLevel,
    pub collection_id: UniqueId,
    pub partition_id: UniqueId,
    #[serde(default)]
    pub field_binlogs: Vec<FieldBinlog>,
    #[serde(default)]
    pub deltalogs: Vec<FieldBinlog>,
}

/// One executable unit of compaction work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionPlan {
    pub plan_id: UniqueId,
    pub compaction_type: CompactionType,
    pub channel: String,
    pub timeout_in_seconds: u32,
    pub segment_binlogs: Vec<CompactionSegmentBinlogs>,
}

impl CompactionPlan {
    pub fn segment_ids(&self) -> Vec<UniqueId> {
        self.segment_binlogs.iter().map(|s| s.segment_id).collect()
    }
}
