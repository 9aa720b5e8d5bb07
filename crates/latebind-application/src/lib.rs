//! # latebind Application Layer
//!
//! The scoped core: values that only become known after a request starts are
//! provided once into the scope and derived, at most once, into the
//! dependencies that were wired before them.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`deferred`] | `DeferredCell` and `MemoizedAsyncResolver` primitives |
//! | [`partner`] | Scoped partner context provider and derived dependencies |
//! | [`execution`] | Execution context injectors and their consumers |
//! | [`services`] | Payment use case |
//! | [`ports`] | Contracts exposed to request handlers |

pub mod deferred;
pub mod execution;
pub mod partner;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use deferred::{DeferredCell, MemoizedAsyncResolver};
pub use partner::{DeferredPaymentRepository, DerivedDependency, ScopedContextProvider};
pub use ports::{CurrentPartnerProvider, PaymentRepositoryFactory, PaymentServiceInterface};
pub use services::PaymentService;
