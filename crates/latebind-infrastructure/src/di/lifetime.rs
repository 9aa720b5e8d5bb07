//! Service lifetime definitions

use std::fmt;

use serde::Serialize;

/// How long a wired instance is shared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// One instance per composition, shared by every scope
    Singleton,
    /// One instance per request scope
    Scoped,
    /// New instance on every request
    Transient,
    /// One instance per root resolution, shared inside that root
    PerResolve,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Singleton => "singleton",
            Self::Scoped => "scoped",
            Self::Transient => "transient",
            Self::PerResolve => "per-resolve",
        };
        f.write_str(name)
    }
}

/// One line of the wiring table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Contract being provided
    pub service: &'static str,
    /// Implementation wired for it
    pub implementation: String,
    /// Sharing policy
    pub lifetime: Lifetime,
}

impl Registration {
    /// Create a registration
    pub fn new(service: &'static str, implementation: impl Into<String>, lifetime: Lifetime) -> Self {
        Self {
            service,
            implementation: implementation.into(),
            lifetime,
        }
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.service, self.implementation, self.lifetime
        )
    }
}
