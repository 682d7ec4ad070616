//! Logging infrastructure.
//!
//! Combined terminal/file logging with timestamps and size-based rotation.
//! Secrets never appear in log messages; callers log entry names only.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path to the log file.
    pub path: PathBuf,
    /// Minimum log level to record in the file.
    pub level: LevelFilter,
    /// Maximum log file size in bytes before rotation (0 = no limit).
    pub max_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("passforge.log"),
            level: LevelFilter::Info,
            max_size: 10 * 1024 * 1024,
        }
    }
}

impl LogConfig {
    /// Creates a config writing to the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Sets the file log level.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Sets the maximum log file size before rotation.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Initializes the process-wide logger.
///
/// Writes to the configured file at `config.level` and, when running in a
/// terminal, mirrors warnings and errors to stderr.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if config.max_size > 0 && config.path.exists() {
        if let Ok(metadata) = std::fs::metadata(&config.path) {
            if metadata.len() > config.max_size {
                rotate_log(&config.path)?;
            }
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .map_err(|e| anyhow!("Failed to open log file: {}", e))?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![];
    loggers.push(WriteLogger::new(config.level, file_config, log_file));

    if in_terminal() {
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    log::info!("Logging initialized at level {:?}", config.level);
    Ok(())
}

fn in_terminal() -> bool {
    std::env::var("TERM").is_ok()
}

/// Renames the current log file with a timestamp suffix.
fn rotate_log(path: &PathBuf) -> Result<()> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let rotated_name = format!(
        "{}.{}",
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("passforge.log"),
        timestamp
    );

    let rotated_path = path.with_file_name(rotated_name);
    std::fs::rename(path, &rotated_path)?;

    log::info!("Rotated log file to: {}", rotated_path.display());
    Ok(())
}
