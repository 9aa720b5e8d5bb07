//! Repository factory without scope memoization

use std::sync::Arc;

use async_trait::async_trait;
use latebind_domain::error::Result;
use latebind_domain::ports::{PartnerContextService, PaymentRepository};
use tracing::debug;

use super::dependency::DependencyBuilder;
use crate::ports::PaymentRepositoryFactory;

/// Looks up the partner on every call and builds a fresh repository
///
/// Used when the handler knows the partner name up front and passes it
/// explicitly instead of injecting it into the scope.
pub struct DirectoryPaymentRepositoryFactory {
    directory: Arc<dyn PartnerContextService>,
    build: DependencyBuilder<Arc<dyn PaymentRepository>>,
}

impl DirectoryPaymentRepositoryFactory {
    /// Create a factory over a directory and a repository builder
    pub fn new(
        directory: Arc<dyn PartnerContextService>,
        build: DependencyBuilder<Arc<dyn PaymentRepository>>,
    ) -> Self {
        Self { directory, build }
    }
}

#[async_trait]
impl PaymentRepositoryFactory for DirectoryPaymentRepositoryFactory {
    async fn create(&self, partner_name: &str) -> Result<Arc<dyn PaymentRepository>> {
        let context = self.directory.get_partner_context(partner_name).await?;
        debug!(
            partner = partner_name,
            location = context.database_location(),
            "Creating payment repository"
        );
        (self.build)(&context)
    }
}
