use tokio::sync::mpsc::{self, Receiver, Sender, error::TrySendError};
use tracing::debug;

use super::plan::CompactionPlan;
use super::signal::CompactionSignal;
use crate::engine::errors::ExecError;
use crate::shared::config::CONFIG;

/// Accepts built plans for asynchronous execution.
///
/// Implementations must not block for the duration of the compaction itself and
/// must be safe to call from concurrent `notify` calls.
pub trait PlanExecutor: Send + Sync {
    fn exec_compaction_plan(
        &self,
        signal: CompactionSignal,
        plan: CompactionPlan,
    ) -> Result<(), ExecError>;
}

/// A plan waiting in the execution queue.
#[derive(Debug, Clone)]
pub struct ScheduledPlan {
    pub signal: CompactionSignal,
    pub plan: CompactionPlan,
}

/// Executor that queues plans on a bounded channel drained by a
/// [`PlanExecutionWorker`](crate::engine::compactor::PlanExecutionWorker).
#[derive(Debug, Clone)]
pub struct ChannelPlanExecutor {
    tx: Sender<ScheduledPlan>,
}

impl ChannelPlanExecutor {
    pub fn new(capacity: usize) -> (Self, Receiver<ScheduledPlan>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Executor sized by `executor.queue_capacity`.
    pub fn from_config() -> (Self, Receiver<ScheduledPlan>) {
        Self::new(CONFIG.executor.queue_capacity)
    }
}

impl PlanExecutor for ChannelPlanExecutor {
    fn exec_compaction_plan(
        &self,
        signal: CompactionSignal,
        plan: CompactionPlan,
    ) -> Result<(), ExecError> {
        let plan_id = plan.plan_id;
        self.tx
            .try_send(ScheduledPlan { signal, plan })
            .map_err(|e| match e {
                TrySendError::Full(_) => ExecError::QueueFull,
                TrySendError::Closed(_) => ExecError::Closed,
            })?;
        debug!(target: "compaction_trigger::executor", plan_id, "Queued compaction plan");
        Ok(())
    }
}
