//! Domain Value Objects
//!
//! Immutable value objects that describe late-bound runtime facts and the
//! records read through them.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`PartnerContext`] | Resolved partner with its database location |
//! | [`Payment`] | Payment record read from a partner database |
//! | [`ExecutionContext`] | Runtime execution context injected into a scope |

/// Execution context value objects
pub mod execution;
/// Partner context value objects
pub mod partner;
/// Payment value objects
pub mod payment;

// Re-export commonly used value objects
pub use execution::ExecutionContext;
pub use partner::PartnerContext;
pub use payment::Payment;
