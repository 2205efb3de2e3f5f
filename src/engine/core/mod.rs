pub mod compaction;

pub use compaction::allocator::{IdAllocator, SequentialIdAllocator};
pub use compaction::executor::{ChannelPlanExecutor, PlanExecutor, ScheduledPlan};
pub use compaction::group_label::{GroupLabel, UniqueId};
pub use compaction::level_zero_view::LevelZeroSegmentsView;
pub use compaction::plan::{CompactionPlan, CompactionSegmentBinlogs, CompactionType, FieldBinlog};
pub use compaction::plan_builder::PlanBuilder;
pub use compaction::policy::{LevelZeroPolicy, SegmentSizePolicy};
pub use compaction::position::Position;
pub use compaction::segment_size_view::SegmentSizeView;
pub use compaction::segment_view::{SegmentLevel, SegmentView};
pub use compaction::signal::CompactionSignal;
pub use compaction::trigger_manager::{
    CompactionTriggerManager, TriggerKind, TriggerManager, TriggerPolicy,
};
pub use compaction::view::CompactionView;
