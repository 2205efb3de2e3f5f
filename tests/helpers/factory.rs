pub use super::factories::{LevelZeroViewFactory, SegmentSizeViewFactory, SegmentViewFactory};

pub struct Factory;

impl Factory {
    pub fn segment_view() -> SegmentViewFactory {
        SegmentViewFactory::new()
    }

    pub fn level_zero_view() -> LevelZeroViewFactory {
        LevelZeroViewFactory::new()
    }

    pub fn segment_size_view() -> SegmentSizeViewFactory {
        SegmentSizeViewFactory::new()
    }
}
