//! Domain Port Interfaces
//!
//! Boundary contracts between the scoped core and its external collaborators.
//! The core never owns global registries; callers inject implementations of
//! these traits and tests substitute deterministic doubles.
//!
//! ## Organization
//!
//! - **partner_directory** - resolves a partner name into a [`PartnerContext`](crate::PartnerContext)
//! - **payment_store** - fetches records from a database location
//! - **payment_repository** - payment access bound to one database location

/// Partner directory port
pub mod partner_directory;
/// Payment repository port
pub mod payment_repository;
/// Payment store port
pub mod payment_store;

pub use partner_directory::PartnerContextService;
pub use payment_repository::PaymentRepository;
pub use payment_store::PaymentStore;
