//! # latebind
//!
//! Scoped, late-bound dependencies: request handlers learn the partner of a
//! request only after the services of the request were wired. The partner
//! name is provided once into the request scope and resolved, at most once,
//! into the partner context and the repositories derived from it.
//!
//! ## Example
//!
//! ```
//! use latebind::infrastructure::{AppConfig, Composition};
//! use latebind::handlers::PaymentController;
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! runtime.block_on(async {
//!     let composition = Composition::from_config(&AppConfig::default());
//!     let scope = composition.create_scope();
//!     let controller = PaymentController::from_scope(&scope);
//!
//!     let payment = controller.get_payment("yesncf", 1).await.unwrap();
//!     assert_eq!(payment.amount, 101);
//! });
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, value objects and collaborator ports
//! - `application` - deferred cells, memoized resolvers and scoped providers
//! - `infrastructure` - configuration, logging and the composition root
//! - `handlers` - request glue on top of a scope

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use latebind_domain::*;
}

/// Application layer - the scoped core
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use latebind_application::*;
}

/// Infrastructure layer - config, logging and composition
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use latebind_infrastructure::*;
}

pub mod cli;
pub mod handlers;

// Re-export commonly used domain types at the crate root
pub use domain::{Error, ExecutionContext, PartnerContext, Payment, Result};
pub use infrastructure::{Composition, RequestScope};
