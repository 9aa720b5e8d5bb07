//! Configuration types

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use latebind_domain::value_objects::Payment;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DIRECTORY_LATENCY_MS, DEFAULT_LOG_LEVEL, DEFAULT_STORAGE_LATENCY_MS, LOG_MAX_FILES,
};

/// Database location of the `yesncf` demo partner
pub const YESNCF_LOCATION: &str = "{Server=1.1.1.1;DatabaseID=Yesncf}";

/// Database location of the `helloexo` demo partner
pub const HELLOEXO_LOCATION: &str = "{Server=2.2.2.2;DatabaseID=Helloexo}";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Partner directory configuration
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Payment storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stderr
    pub file_output: Option<PathBuf>,

    /// Maximum number of daily log files to keep
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
            max_files: LOG_MAX_FILES,
        }
    }
}

/// Partner directory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Simulated lookup latency in milliseconds
    pub latency_ms: u64,

    /// Partner name to database location
    pub partners: BTreeMap<String, String>,
}

impl DirectoryConfig {
    /// Lookup latency as a duration
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_DIRECTORY_LATENCY_MS,
            partners: BTreeMap::from([
                ("yesncf".to_string(), YESNCF_LOCATION.to_string()),
                ("helloexo".to_string(), HELLOEXO_LOCATION.to_string()),
            ]),
        }
    }
}

/// Payment storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Simulated fetch latency in milliseconds
    pub latency_ms: u64,

    /// Database location to the payments it holds
    pub payments: BTreeMap<String, Vec<Payment>>,
}

impl StorageConfig {
    /// Fetch latency as a duration
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_STORAGE_LATENCY_MS,
            payments: BTreeMap::from([
                (
                    YESNCF_LOCATION.to_string(),
                    vec![Payment::new(1, 100), Payment::new(2, 200)],
                ),
                (
                    HELLOEXO_LOCATION.to_string(),
                    vec![Payment::new(1, 500), Payment::new(2, 600)],
                ),
            ]),
        }
    }
}
