//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `latebind_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "latebind.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "latebind";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "LATEBIND";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "LATEBIND_LOG";

/// Log file name stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "latebind";

/// Maximum number of rotated log files kept
pub const LOG_MAX_FILES: usize = 5;

// ============================================================================
// COLLABORATOR CONSTANTS
// ============================================================================

/// Default simulated latency of a partner lookup in milliseconds
pub const DEFAULT_DIRECTORY_LATENCY_MS: u64 = 10;

/// Default simulated latency of a payment fetch in milliseconds
pub const DEFAULT_STORAGE_LATENCY_MS: u64 = 5;

/// Upper bound for configured latencies in milliseconds
pub const MAX_LATENCY_MS: u64 = 60_000;
