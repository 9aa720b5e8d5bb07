//! # latebind - Provider Implementations
//!
//! Implementations of the collaborator ports defined in `latebind-domain`.
//! The in-memory providers stand in for a real partner registry and real
//! partner databases; both are injected, never process-wide state.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Directory | `PartnerContextService` | InMemory |
//! | Store | `PaymentStore` | InMemory |
//! | Repository | `PaymentRepository` | Located |

// Re-export domain types commonly used with providers
pub use latebind_domain::error::{Error, Result};
pub use latebind_domain::ports::{PartnerContextService, PaymentRepository, PaymentStore};

/// Provider-specific constants
pub mod constants;

/// Partner directory implementations
pub mod directory;

/// Payment store implementations
pub mod store;

/// Payment repositories bound to a database location
pub mod repository;

pub use directory::InMemoryPartnerDirectory;
pub use repository::{LocatedPaymentRepository, located_repository_builder};
pub use store::InMemoryPaymentStore;
