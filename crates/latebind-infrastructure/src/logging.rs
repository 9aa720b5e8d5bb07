//! Structured logging with tracing
//!
//! Installs the global subscriber: an env filter, plain or JSON output on
//! stderr and an optional daily-rolling log file. Stdout is left to command
//! output.

use std::ffi::OsStr;
use std::path::Path;

use latebind_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_appender::rolling::{Builder, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;

/// Initialize logging with the provided configuration
///
/// `LATEBIND_LOG` overrides the configured level with any env filter
/// directive. Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level)?;
    let filter = log_filter(config);
    let directives = filter.to_string();
    let file_appender = config
        .file_output
        .as_deref()
        .map(|path| file_appender(path, config.max_files))
        .transpose()?;

    // Layer types differ per format, hence the separate branches
    let installed = if config.json_format {
        let console = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    } else {
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    };
    installed.context("Failed to install the tracing subscriber")?;

    info!(filter = %directives, "Logging initialized");
    Ok(())
}

/// Build the env filter in effect for `config`
///
/// A valid `LATEBIND_LOG` directive wins over the configured level.
pub fn log_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Open a daily-rolling appender for `path`, keeping at most `max_files`
///
/// Files are named `<stem>.<date>` next to `path`. Zero keeps every file.
pub fn file_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM));
    Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(stem.to_string_lossy())
        .max_log_files(max_files)
        .build(directory)
        .io_context(format!("Failed to create log file in {}", directory.display()))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
