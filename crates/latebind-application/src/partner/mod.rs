//! Partner-scoped providers
//!
//! ```text
//! provide_partner_name("yesncf")
//!         │
//!         ▼
//! DeferredCell<String> ──▶ MemoizedAsyncResolver<String, PartnerContext>   (one directory lookup)
//!                                   │
//!                                   ▼
//!                 MemoizedAsyncResolver<PartnerContext, T>   (one dependency per scope)
//! ```

pub mod dependency;
pub mod factory;
pub mod provider;

pub use dependency::{DeferredPaymentRepository, DependencyBuilder, DerivedDependency};
pub use factory::DirectoryPaymentRepositoryFactory;
pub use provider::ScopedContextProvider;
