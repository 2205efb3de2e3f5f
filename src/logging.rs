use anyhow::Context;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::{CONFIG, LoggingConfig};

const LOG_FILE_PREFIX: &str = "compaction_trigger.log";

/// Stdout and file verbosity taken from the `[logging]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevels {
    pub stdout: LevelFilter,
    pub file: LevelFilter,
}

impl LogLevels {
    pub fn from_config(cfg: &LoggingConfig) -> anyhow::Result<Self> {
        let stdout = cfg
            .stdout_level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid logging.stdout_level {:?}", cfg.stdout_level))?;
        let file = cfg
            .file_level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid logging.file_level {:?}", cfg.file_level))?;
        Ok(Self { stdout, file })
    }
}

/// Installs the global subscriber from the loaded configuration.
pub fn init() -> anyhow::Result<WorkerGuard> {
    init_with(&CONFIG.logging)
}

/// Installs a stdout layer plus a daily-rolling file layer under `cfg.log_dir`.
///
/// File writes go through a background thread; keep the returned guard alive
/// until shutdown so buffered lines are flushed.
pub fn init_with(cfg: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let levels = LogLevels::from_config(cfg)?;

    let file_appender = tracing_appender::rolling::daily(&cfg.log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_filter(levels.stdout))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .with_filter(levels.file),
        )
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    info!(
        target: "compaction_trigger::logging",
        log_dir = %cfg.log_dir,
        stdout = %levels.stdout,
        file = %levels.file,
        "Logging initialized"
    );
    Ok(guard)
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("compaction_trigger=debug".parse().unwrap());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
