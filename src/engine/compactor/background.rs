use crate::engine::core::{CompactionPlan, CompactionSignal, ScheduledPlan};
use crate::engine::errors::ExecError;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runs one compaction plan against storage. Called on the blocking pool.
pub trait PlanRunner: Send + Sync + 'static {
    fn run(&self, signal: &CompactionSignal, plan: &CompactionPlan) -> Result<(), ExecError>;
}

/// Drains queued plans and hands them to a [`PlanRunner`] one at a time.
pub struct PlanExecutionWorker {
    runner: Arc<dyn PlanRunner>,
}

impl PlanExecutionWorker {
    pub fn new(runner: Arc<dyn PlanRunner>) -> Self {
        Self { runner }
    }

    /// Processes plans until every sender is dropped. Returns how many plans ran successfully.
    pub async fn run(&self, mut rx: Receiver<ScheduledPlan>) -> usize {
        let mut completed = 0;
        while let Some(job) = rx.recv().await {
            let task_id = job.signal.id;
            let plan_id = job.plan.plan_id;
            let compaction_type = job.plan.compaction_type;
            let runner = Arc::clone(&self.runner);

            // Run off the async threads so a panicking runner only loses its own plan.
            let result =
                tokio::task::spawn_blocking(move || runner.run(&job.signal, &job.plan)).await;

            match result {
                Ok(Ok(())) => {
                    completed += 1;
                    info!(
                        target: "compaction_trigger::execution",
                        task_id,
                        plan_id,
                        %compaction_type,
                        "Compaction plan finished"
                    );
                }
                Ok(Err(e)) => {
                    error!(
                        target: "compaction_trigger::execution",
                        task_id,
                        plan_id,
                        error = %e,
                        "Compaction plan failed"
                    );
                }
                Err(e) => {
                    error!(
                        target: "compaction_trigger::execution",
                        task_id,
                        plan_id,
                        error = %e,
                        "Compaction plan runner panicked"
                    );
                }
            }
        }
        info!(target: "compaction_trigger::execution", completed, "Plan queue closed, worker exiting");
        completed
    }
}

pub fn start_plan_execution_worker(
    rx: Receiver<ScheduledPlan>,
    runner: Arc<dyn PlanRunner>,
) -> JoinHandle<usize> {
    tokio::spawn(async move { PlanExecutionWorker::new(runner).run(rx).await })
}
