use tracing::debug;

use super::allocator::IdAllocator;
use super::plan::{CompactionPlan, CompactionSegmentBinlogs};
use super::view::CompactionView;
use crate::engine::errors::PlanBuildError;
use crate::shared::config::CONFIG;

/// Turns accepted output views into executable plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanBuilder {
    timeout_in_seconds: u32,
}

impl PlanBuilder {
    /// A zero timeout is raised to one second.
    pub fn new(timeout_in_seconds: u32) -> Self {
        Self {
            timeout_in_seconds: timeout_in_seconds.max(1),
        }
    }

    pub fn timeout_in_seconds(&self) -> u32 {
        self.timeout_in_seconds
    }

    /// Builds a plan for `view`, allocating its id last so no id is spent on a rejected view.
    ///
    /// Bin-log and delta-log payloads are left empty; the executor fills them before running.
    pub fn build_compaction_plan(
        &self,
        view: &CompactionView,
        allocator: &dyn IdAllocator,
    ) -> Result<CompactionPlan, PlanBuildError> {
        let label = view.group_label();
        if view.segments().is_empty() {
            return Err(PlanBuildError::EmptyView(label.clone()));
        }

        let segment_binlogs: Vec<CompactionSegmentBinlogs> = view
            .segments()
            .iter()
            .map(|seg| CompactionSegmentBinlogs {
                segment_id: seg.id,
                level: seg.level,
                collection_id: label.collection_id,
                partition_id: label.partition_id,
                field_binlogs: Vec::new(),
                deltalogs: Vec::new(),
            })
            .collect();

        let plan_id = allocator.alloc_id()?;

        debug!(
            target: "compaction_trigger::plan_builder",
            plan_id,
            segments = segment_binlogs.len(),
            compaction_type = %view.compaction_type(),
            "Built compaction plan"
        );

        Ok(CompactionPlan {
            plan_id,
            compaction_type: view.compaction_type(),
            channel: label.channel.clone(),
            timeout_in_seconds: self.timeout_in_seconds,
            segment_binlogs,
        })
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new(CONFIG.compaction.timeout_in_seconds)
    }
}
