use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub compaction: CompactionConfig,
    #[serde(default)]
    pub executor: ExecutorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct CompactionConfig {
    /// Seconds a built plan may run before the executor gives up on it
    #[serde(default = "default_timeout_in_seconds")]
    pub timeout_in_seconds: u32,
    #[serde(default)]
    pub level_zero: LevelZeroConfig,
    #[serde(default)]
    pub segment_size: SegmentSizeConfig,
}

impl Default for CompactionConfig {
    fn default() -> Self {
        Self {
            timeout_in_seconds: default_timeout_in_seconds(),
            level_zero: LevelZeroConfig::default(),
            segment_size: SegmentSizeConfig::default(),
        }
    }
}

fn default_timeout_in_seconds() -> u32 {
    900
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelZeroConfig {
    /// Eligible L0 segments needed before a count-based trigger fires
    pub min_segment_count: usize,
    /// Upper bound on L0 segments picked into one plan by count
    pub max_segment_count: usize,
    /// Accumulated delta bytes needed before a size-based trigger fires
    pub min_delta_size_bytes: u64,
    /// Upper bound on accumulated delta bytes per plan
    pub max_delta_size_bytes: u64,
}

impl Default for LevelZeroConfig {
    fn default() -> Self {
        Self {
            min_segment_count: 10,
            max_segment_count: 30,
            min_delta_size_bytes: 8 * 1024 * 1024,
            max_delta_size_bytes: 64 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SegmentSizeConfig {
    pub max_segment_size_bytes: u64,
    /// Segments below `max_segment_size_bytes * small_proportion` count as small
    pub small_proportion: f64,
    pub min_small_segments: usize,
}

impl Default for SegmentSizeConfig {
    fn default() -> Self {
        Self {
            max_segment_size_bytes: 1024 * 1024 * 1024,
            small_proportion: 0.5,
            min_small_segments: 2,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExecutorConfig {
    /// Plans that may wait in the execution queue before submissions are refused
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_queue_capacity() -> usize {
    256
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("COMPACTION_TRIGGER_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Loads settings from `config_path` (extension optional). A missing file yields defaults.
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .build()?
        .try_deserialize()?;

    if settings.compaction.timeout_in_seconds == 0 {
        return Err(config::ConfigError::Message(
            "compaction.timeout_in_seconds must be positive".to_string(),
        ));
    }

    Ok(settings)
}
