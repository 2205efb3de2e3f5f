pub mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{
    CompactionConfig, ExecutorConfig, LevelZeroConfig, LoggingConfig, SegmentSizeConfig, Settings,
    load_settings, load_settings_from,
};
