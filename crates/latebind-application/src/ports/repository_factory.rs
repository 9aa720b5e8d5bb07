//! Payment Repository Factory Port

use std::sync::Arc;

use async_trait::async_trait;
use latebind_domain::error::Result;
use latebind_domain::ports::PaymentRepository;

/// Builds a payment repository for an explicitly named partner
///
/// The caller passes the partner name on every call, so nothing is deferred
/// or memoized and the factory can live as a singleton.
#[async_trait]
pub trait PaymentRepositoryFactory: Send + Sync {
    /// Look up the partner and build a repository bound to its database
    async fn create(&self, partner_name: &str) -> Result<Arc<dyn PaymentRepository>>;
}
