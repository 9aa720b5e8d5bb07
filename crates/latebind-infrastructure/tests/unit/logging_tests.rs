//! Tests for logging setup

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

use latebind_domain::Error;
use latebind_infrastructure::config::LoggingConfig;
use latebind_infrastructure::logging::{file_appender, init_logging, log_filter, parse_log_level};
use tempfile::TempDir;
use tracing::Level;

fn log_files(dir: &Path, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();
    names
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("Info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_invalid_level_fails_before_installing() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        ..LoggingConfig::default()
    };

    assert!(init_logging(&config).is_err());
}

#[test]
fn test_subscriber_installs_once() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        json_format: true,
        file_output: Some(temp_dir.path().join("latebind.log")),
        ..LoggingConfig::default()
    };

    let first = init_logging(&config);
    let second = init_logging(&config);

    assert!(first.is_ok());
    assert!(second.is_err());
}

#[test]
fn test_file_appender_writes_dated_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut appender = file_appender(&temp_dir.path().join("app.log"), 5).unwrap();
    appender.write_all(b"payment looked up\n").unwrap();
    appender.flush().unwrap();

    let files = log_files(temp_dir.path(), "app.");
    assert_eq!(files.len(), 1);
    let contents = fs::read_to_string(temp_dir.path().join(&files[0])).unwrap();
    assert_eq!(contents, "payment looked up\n");
}

#[test]
fn test_file_appender_prunes_beyond_max_files() {
    let temp_dir = TempDir::new().unwrap();
    for day in ["2020-01-01", "2020-01-02", "2020-01-03"] {
        fs::write(temp_dir.path().join(format!("app.{day}")), day).unwrap();
    }

    let _appender = file_appender(&temp_dir.path().join("app.log"), 2).unwrap();

    assert_eq!(log_files(temp_dir.path(), "app.").len(), 2);
}

#[test]
fn test_file_appender_reports_unusable_directory() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let err = file_appender(&blocker.join("app.log"), 5).unwrap_err();

    assert!(matches!(err, Error::Io { .. }), "unexpected error: {err}");
}

#[test]
#[ignore = "mutates process environment"]
fn test_log_filter_prefers_valid_env_directive() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        ..LoggingConfig::default()
    };

    // SAFETY: ignored by default, run single-threaded with --ignored
    unsafe {
        env::remove_var("LATEBIND_LOG");
    }
    assert_eq!(log_filter(&config).to_string(), "warn");

    unsafe {
        env::set_var("LATEBIND_LOG", "latebind=debug");
    }
    assert_eq!(log_filter(&config).to_string(), "latebind=debug");

    unsafe {
        env::set_var("LATEBIND_LOG", "latebind=loud");
    }
    assert_eq!(log_filter(&config).to_string(), "warn");

    unsafe {
        env::remove_var("LATEBIND_LOG");
    }
}
