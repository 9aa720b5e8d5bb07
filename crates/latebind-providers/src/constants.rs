//! Provider constants

/// Provider name reported by the in-memory implementations
pub const IN_MEMORY_PROVIDER_NAME: &str = "in_memory";

/// Failure message for a partner missing from the directory
pub const UNKNOWN_PARTNER_MESSAGE: &str = "unknown partner";

/// Failure message for a database location missing from the store
pub const UNKNOWN_DATABASE_MESSAGE: &str = "unknown database";

/// Failure message for a payment id missing from a database
pub const PAYMENT_NOT_FOUND_MESSAGE: &str = "payment not found";
