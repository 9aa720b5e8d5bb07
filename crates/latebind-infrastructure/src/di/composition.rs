//! Singleton composition

use std::sync::Arc;

use latebind_application::partner::DirectoryPaymentRepositoryFactory;
use latebind_application::ports::PaymentRepositoryFactory;
use latebind_domain::ports::{PartnerContextService, PaymentStore};
use latebind_providers::{InMemoryPartnerDirectory, InMemoryPaymentStore, located_repository_builder};
use tracing::info;

use super::lifetime::{Lifetime, Registration};
use super::scope::RequestScope;
use crate::config::AppConfig;

/// Holds the singletons and creates request scopes over them
#[derive(Clone)]
pub struct Composition {
    directory: Arc<dyn PartnerContextService>,
    store: Arc<dyn PaymentStore>,
    repository_factory: Arc<dyn PaymentRepositoryFactory>,
}

impl Composition {
    /// Compose over the given collaborators
    pub fn new(directory: Arc<dyn PartnerContextService>, store: Arc<dyn PaymentStore>) -> Self {
        let repository_factory: Arc<dyn PaymentRepositoryFactory> =
            Arc::new(DirectoryPaymentRepositoryFactory::new(
                Arc::clone(&directory),
                located_repository_builder(Arc::clone(&store)),
            ));
        Self {
            directory,
            store,
            repository_factory,
        }
    }

    /// Compose over in-memory collaborators seeded from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let directory = config
            .directory
            .partners
            .iter()
            .map(|(name, location)| (name.as_str(), location.as_str()))
            .collect::<InMemoryPartnerDirectory>()
            .with_latency(config.directory.latency());

        let store = config.storage.payments.iter().fold(
            InMemoryPaymentStore::new().with_latency(config.storage.latency()),
            |store, (location, payments)| store.with_payments(location.as_str(), payments.iter().copied()),
        );

        info!(
            partners = directory.len(),
            databases = config.storage.payments.len(),
            "Composition created from configuration"
        );
        Self::new(Arc::new(directory), Arc::new(store))
    }

    /// Start a new request scope
    pub fn create_scope(&self) -> RequestScope {
        RequestScope::new(Arc::clone(&self.directory), Arc::clone(&self.store))
    }

    /// Partner directory singleton
    pub fn directory(&self) -> Arc<dyn PartnerContextService> {
        Arc::clone(&self.directory)
    }

    /// Payment store singleton
    pub fn store(&self) -> Arc<dyn PaymentStore> {
        Arc::clone(&self.store)
    }

    /// Repository factory for handlers that pass the partner name explicitly
    pub fn payment_repository_factory(&self) -> Arc<dyn PaymentRepositoryFactory> {
        Arc::clone(&self.repository_factory)
    }

    /// Wiring table of this composition
    pub fn registrations(&self) -> Vec<Registration> {
        vec![
            Registration::new(
                "PartnerContextService",
                self.directory.provider_name(),
                Lifetime::Singleton,
            ),
            Registration::new("PaymentStore", self.store.provider_name(), Lifetime::Singleton),
            Registration::new(
                "PaymentRepositoryFactory",
                "DirectoryPaymentRepositoryFactory",
                Lifetime::Singleton,
            ),
            Registration::new(
                "CurrentPartnerProvider",
                "ScopedContextProvider",
                Lifetime::Scoped,
            ),
            Registration::new(
                "PaymentRepository",
                "DeferredPaymentRepository",
                Lifetime::Scoped,
            ),
            Registration::new(
                "ExecutionContextInjector",
                "ExecutionContextInjector",
                Lifetime::Scoped,
            ),
            Registration::new(
                "ExecutionContextAsyncInjector",
                "ExecutionContextAsyncInjector",
                Lifetime::Scoped,
            ),
            Registration::new("PaymentServiceInterface", "PaymentService", Lifetime::Transient),
            Registration::new("SampleService", "SampleService", Lifetime::Transient),
            Registration::new("SampleAsyncService", "SampleAsyncService", Lifetime::Transient),
            Registration::new("PaymentRoot", "PaymentRoot", Lifetime::PerResolve),
        ]
    }
}

impl std::fmt::Debug for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composition")
            .field("directory", &self.directory.provider_name())
            .field("store", &self.store.provider_name())
            .finish_non_exhaustive()
    }
}
