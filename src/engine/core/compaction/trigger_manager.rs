use std::fmt::{Display, Formatter};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::allocator::IdAllocator;
use super::executor::PlanExecutor;
use super::group_label::UniqueId;
use super::plan_builder::PlanBuilder;
use super::signal::CompactionSignal;
use super::view::CompactionView;
use crate::engine::errors::UnknownTriggerKind;

/// Event that asks the trigger manager to re-evaluate a batch of views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    LevelZeroViewChange,
    LevelZeroViewIdle,
    SegmentSizeViewChange,
}

/// How a view's policy is consulted for a given event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerPolicy {
    /// Only the soft threshold
    Soft,
    /// Soft threshold first, forced evaluation when it yields nothing
    SoftThenForce,
}

impl TriggerKind {
    pub fn policy(self) -> TriggerPolicy {
        match self {
            TriggerKind::LevelZeroViewChange => TriggerPolicy::Soft,
            TriggerKind::LevelZeroViewIdle => TriggerPolicy::SoftThenForce,
            TriggerKind::SegmentSizeViewChange => TriggerPolicy::Soft,
        }
    }

    /// Whether views of this variant are evaluated for this event.
    pub fn applies_to(self, view: &CompactionView) -> bool {
        match (self, view) {
            (
                TriggerKind::LevelZeroViewChange | TriggerKind::LevelZeroViewIdle,
                CompactionView::LevelZero(_),
            ) => true,
            (TriggerKind::SegmentSizeViewChange, CompactionView::SegmentSize(_)) => true,
            _ => false,
        }
    }

    pub fn code(self) -> i8 {
        match self {
            TriggerKind::LevelZeroViewChange => 1,
            TriggerKind::LevelZeroViewIdle => 2,
            TriggerKind::SegmentSizeViewChange => 3,
        }
    }
}

impl TryFrom<i8> for TriggerKind {
    type Error = UnknownTriggerKind;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TriggerKind::LevelZeroViewChange),
            2 => Ok(TriggerKind::LevelZeroViewIdle),
            3 => Ok(TriggerKind::SegmentSizeViewChange),
            other => Err(UnknownTriggerKind(other)),
        }
    }
}

impl Display for TriggerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TriggerKind::LevelZeroViewChange => "LevelZeroViewChange",
            TriggerKind::LevelZeroViewIdle => "LevelZeroViewIdle",
            TriggerKind::SegmentSizeViewChange => "SegmentSizeViewChange",
        };
        f.write_str(name)
    }
}

/// Entry point for event sources that observed a change in compaction views.
pub trait TriggerManager: Send + Sync {
    fn notify(&self, task_id: UniqueId, kind: TriggerKind, views: &[CompactionView]);
}

/// Evaluates views on each event and submits a plan for every view that asks for compaction.
///
/// Holds no mutable state: concurrent `notify` calls only share the allocator and executor.
/// Failures are logged and never surfaced to the caller; a plan that fails to build is
/// dropped rather than retried.
pub struct CompactionTriggerManager {
    allocator: Arc<dyn IdAllocator>,
    executor: Arc<dyn PlanExecutor>,
    plan_builder: PlanBuilder,
}

impl CompactionTriggerManager {
    /// Manager whose plans carry the configured `compaction.timeout_in_seconds`.
    pub fn new(allocator: Arc<dyn IdAllocator>, executor: Arc<dyn PlanExecutor>) -> Self {
        Self::with_plan_builder(allocator, executor, PlanBuilder::default())
    }

    pub fn with_plan_builder(
        allocator: Arc<dyn IdAllocator>,
        executor: Arc<dyn PlanExecutor>,
        plan_builder: PlanBuilder,
    ) -> Self {
        Self {
            allocator,
            executor,
            plan_builder,
        }
    }

    /// Like [`TriggerManager::notify`] for callers that carry the event kind as a wire code.
    /// Unknown codes are ignored.
    pub fn notify_by_code(&self, task_id: UniqueId, code: i8, views: &[CompactionView]) {
        match TriggerKind::try_from(code) {
            Ok(kind) => self.notify(task_id, kind, views),
            Err(e) => {
                warn!(target: "compaction_trigger::notify", task_id, views = views.len(), "{}, ignoring event", e);
            }
        }
    }

    fn evaluate(
        &self,
        task_id: UniqueId,
        kind: TriggerKind,
        view: &CompactionView,
    ) -> (Option<CompactionView>, String) {
        let (out_view, reason) = view.trigger();
        match kind.policy() {
            TriggerPolicy::Soft => (out_view, reason),
            TriggerPolicy::SoftThenForce => {
                if out_view.is_some() {
                    return (out_view, reason);
                }
                info!(target: "compaction_trigger::notify", task_id, %kind, "Soft trigger found nothing, force triggering");
                view.force_trigger()
            }
        }
    }

    /// Builds a plan for `out_view` and hands it to the executor.
    pub fn submit_to_scheduler(&self, task_id: UniqueId, out_view: CompactionView) {
        let plan = match self
            .plan_builder
            .build_compaction_plan(&out_view, self.allocator.as_ref())
        {
            Ok(plan) => plan,
            Err(e) => {
                e.log_error(task_id);
                return;
            }
        };

        let signal = CompactionSignal::for_view_trigger(
            task_id,
            out_view.group_label(),
            out_view.watermark().cloned(),
        );

        let plan_id = plan.plan_id;
        let compaction_type = plan.compaction_type;
        match self.executor.exec_compaction_plan(signal, plan) {
            Ok(()) => {
                info!(
                    target: "compaction_trigger::submit",
                    task_id,
                    plan_id,
                    %compaction_type,
                    "Submitted compaction plan"
                );
            }
            Err(e) => {
                error!(
                    target: "compaction_trigger::submit",
                    task_id,
                    plan_id,
                    %compaction_type,
                    error = %e,
                    "Executor rejected compaction plan"
                );
            }
        }
    }
}

impl TriggerManager for CompactionTriggerManager {
    fn notify(&self, task_id: UniqueId, kind: TriggerKind, views: &[CompactionView]) {
        for view in views {
            if !kind.applies_to(view) {
                debug!(target: "compaction_trigger::notify", task_id, %kind, %view, "View does not belong to this trigger kind, skipping");
                continue;
            }

            debug!(target: "compaction_trigger::notify", task_id, %kind, %view, "Evaluating compaction view");
            let (out_view, reason) = self.evaluate(task_id, kind, view);
            if let Some(out_view) = out_view {
                info!(
                    target: "compaction_trigger::notify",
                    task_id,
                    %kind,
                    reason = %reason,
                    output_view = %out_view,
                    "Triggered compaction output view, submitting"
                );
                self.submit_to_scheduler(task_id, out_view);
            }
        }
    }
}
