pub mod allocator;
pub mod executor;
pub mod group_label;
pub mod level_zero_view;
pub mod plan;
pub mod plan_builder;
pub mod policy;
pub mod position;
pub mod segment_size_view;
pub mod segment_view;
pub mod signal;
pub mod trigger_manager;
pub mod view;
