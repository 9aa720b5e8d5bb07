//! Payment repository bound to one database location

use std::sync::Arc;

use async_trait::async_trait;
use latebind_application::partner::DependencyBuilder;
use latebind_domain::error::Result;
use latebind_domain::ports::{PaymentRepository, PaymentStore};
use latebind_domain::value_objects::{PartnerContext, Payment};

/// Repository reading payments of a single partner database through a store
pub struct LocatedPaymentRepository {
    location: String,
    store: Arc<dyn PaymentStore>,
}

impl LocatedPaymentRepository {
    /// Create a repository reading from `location`
    pub fn new(location: impl Into<String>, store: Arc<dyn PaymentStore>) -> Self {
        Self {
            location: location.into(),
            store,
        }
    }

    /// Create a repository bound to the database of a resolved partner
    pub fn for_partner(context: &PartnerContext, store: Arc<dyn PaymentStore>) -> Self {
        Self::new(context.database_location(), store)
    }
}

impl std::fmt::Debug for LocatedPaymentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocatedPaymentRepository")
            .field("location", &self.location)
            .field("store", &self.store.provider_name())
            .finish()
    }
}

#[async_trait]
impl PaymentRepository for LocatedPaymentRepository {
    async fn get_payment(&self, payment_id: i32) -> Result<Payment> {
        self.store.fetch_payment(&self.location, payment_id).await
    }

    fn database_location(&self) -> &str {
        &self.location
    }
}

/// Builder turning a resolved partner context into a [`LocatedPaymentRepository`]
pub fn located_repository_builder(
    store: Arc<dyn PaymentStore>,
) -> DependencyBuilder<Arc<dyn PaymentRepository>> {
    Arc::new(move |context: &PartnerContext| {
        let repository: Arc<dyn PaymentRepository> = Arc::new(
            LocatedPaymentRepository::for_partner(context, Arc::clone(&store)),
        );
        Ok(repository)
    })
}
