//! Logging setup
//!
//! Stdout belongs to the interactive prompts and the final "saved to" line,
//! so every log line goes to stderr and, when possible, to a log file.

use crate::error::NovelError;
use std::fs::File;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "lightnovel.log";

/// Install stderr and file logging at `level`
///
/// `RUST_LOG` overrides `level` when set.
pub fn setup_logging(log_dir: &Path, level: Level) -> Result<(), NovelError> {
    let (log_file, log_file_path) = open_log_file(log_dir)?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter(level));

    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_line_number(true)
        .with_filter(env_filter(level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| NovelError::config(format!("Failed to install logger: {}", e)))?;

    tracing::info!("Logging to {} at {}", log_file_path.display(), level);
    Ok(())
}

/// Stderr-only fallback when the log file cannot be opened
pub fn setup_console_logging(level: Level) -> Result<(), NovelError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(env_filter(level))
        .try_init()
        .map_err(|e| NovelError::config(format!("Failed to install logger: {}", e)))
}

/// Parse a configured level name, falling back to INFO
pub fn parse_log_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to INFO", level);
            Level::INFO
        }
    }
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()))
}

fn open_log_file(log_dir: &Path) -> Result<(File, std::path::PathBuf), NovelError> {
    std::fs::create_dir_all(log_dir).map_err(|e| {
        NovelError::config(format!(
            "Failed to create log directory {}: {}",
            log_dir.display(),
            e
        ))
    })?;

    let path = log_dir.join(LOG_FILE_NAME);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            NovelError::config(format!("Failed to open log file {}: {}", path.display(), e))
        })?;

    Ok((file, path))
}
