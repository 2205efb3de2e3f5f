use thiserror::Error;
use tracing::{debug, error, warn};

use crate::engine::core::compaction::group_label::GroupLabel;

/// Errors returned by an [`IdAllocator`](crate::engine::core::IdAllocator).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocError {
    #[error("Identifier quota exhausted at {limit}")]
    Exhausted { limit: i64 },

    #[error("Identifier backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum PlanBuildError {
    #[error("Plan id allocation failed: {0}")]
    Alloc(#[from] AllocError),

    #[error("Output view for {0} has no segments")]
    EmptyView(GroupLabel),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecError {
    #[error("Plan execution queue is full")]
    QueueFull,

    #[error("Plan execution queue is closed")]
    Closed,

    #[error("Plan runner failed: {0}")]
    Runner(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unknown compaction trigger kind: {0}")]
pub struct UnknownTriggerKind(pub i8);

impl PlanBuildError {
    pub fn log_error(&self, task_id: i64) {
        match self {
            PlanBuildError::Alloc(e) => {
                error!(target: "compaction_trigger::submit", task_id, error = %e, "Failed to allocate plan id, dropping output view");
                debug!(target: "compaction_trigger::submit", task_id, "Allocation error details: {:?}", e);
            }
            PlanBuildError::EmptyView(label) => {
                warn!(target: "compaction_trigger::submit", task_id, %label, "Refusing to build a plan from an empty view");
            }
        }
    }
}
