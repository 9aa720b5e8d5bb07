//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for latebind
///
/// Every variant carries owned strings only, so the error is `Clone` and one
/// failed resolution can be handed to every caller that awaited it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A deferred value was read before it was provided
    #[error("{what} has not been provided")]
    NotProvided {
        /// The deferred value that is missing
        what: String,
    },

    /// A deferred value was provided more than once in the same scope
    #[error("{what} is already provided. You can only do it once per scope")]
    AlreadyProvided {
        /// The deferred value that was provided twice
        what: String,
    },

    /// A memoized value was requested for a key other than the one it holds
    #[error("Scope mismatch: resolved for {resolved} but {requested} was requested")]
    ScopeMismatch {
        /// Key the cached value belongs to
        resolved: String,
        /// Key of the rejected request
        requested: String,
    },

    /// The partner directory could not resolve a key
    #[error("Lookup failed for '{key}': {message}")]
    Lookup {
        /// The key that was looked up
        key: String,
        /// Description of the failure
        message: String,
    },

    /// The payment store could not fetch a record
    #[error("Fetch of record {id} at '{locator}' failed: {message}")]
    Fetch {
        /// Database location that was queried
        locator: String,
        /// Record identifier
        id: i32,
        /// Description of the failure
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Deferred value error creation methods
impl Error {
    /// Create a not provided error
    pub fn not_provided<S: Into<String>>(what: S) -> Self {
        Self::NotProvided { what: what.into() }
    }

    /// Create an already provided error
    pub fn already_provided<S: Into<String>>(what: S) -> Self {
        Self::AlreadyProvided { what: what.into() }
    }

    /// Create a scope mismatch error
    pub fn scope_mismatch<R: Into<String>, Q: Into<String>>(resolved: R, requested: Q) -> Self {
        Self::ScopeMismatch {
            resolved: resolved.into(),
            requested: requested.into(),
        }
    }
}

// Collaborator error creation methods
impl Error {
    /// Create a lookup error
    pub fn lookup<K: Into<String>, S: Into<String>>(key: K, message: S) -> Self {
        Self::Lookup {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch<L: Into<String>, S: Into<String>>(locator: L, id: i32, message: S) -> Self {
        Self::Fetch {
            locator: locator.into(),
            id,
            message: message.into(),
        }
    }
}

// General error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error reports a sequencing mistake by the caller
    /// (reading too early or providing twice) rather than a collaborator failure
    pub fn is_sequencing(&self) -> bool {
        matches!(self, Self::NotProvided { .. } | Self::AlreadyProvided { .. })
    }
}
