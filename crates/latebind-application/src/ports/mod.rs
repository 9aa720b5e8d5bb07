//! Application Port Interfaces
//!
//! Contracts exposed by the scoped core to request-handling code.

/// Scoped partner provider port
pub mod current_partner;
/// Payment use case port
pub mod payment_service;
/// Unscoped repository factory port
pub mod repository_factory;

pub use current_partner::CurrentPartnerProvider;
pub use payment_service::PaymentServiceInterface;
pub use repository_factory::PaymentRepositoryFactory;
