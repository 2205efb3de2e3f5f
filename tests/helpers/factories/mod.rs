pub mod segment_size_view_factory;
pub mod segment_view_factory;

pub use level_zero_view_factory::LevelZeroViewFactory;
pub use segment_size_view_factory::SegmentSizeViewFactory;
pub use segment_view_factory::SegmentViewFactory;

#[cfg(test)]
mod level_zero_view_factory_test;
#[cfg(test)]
mod segment_size_view_factory_test;
#[cfg(test)]
mod segment_view_factory_test;
