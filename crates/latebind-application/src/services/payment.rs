//! Payment use case

use std::sync::Arc;

use async_trait::async_trait;
use latebind_domain::constants::DERIVED_PAYMENT_INCREMENT;
use latebind_domain::error::Result;
use latebind_domain::ports::PaymentRepository;
use latebind_domain::value_objects::Payment;

use crate::partner::DeferredPaymentRepository;
use crate::ports::PaymentServiceInterface;

/// Where the payment service gets its repository from
enum RepositorySource {
    /// Scoped repository, resolved once the partner is known
    Deferred(Arc<DeferredPaymentRepository>),
    /// Repository built by the caller up front
    Ready(Arc<dyn PaymentRepository>),
}

/// Computes derived payments for the current partner
pub struct PaymentService {
    repository: RepositorySource,
}

impl PaymentService {
    /// Create a service over the scope's deferred repository
    pub fn new(repository: Arc<DeferredPaymentRepository>) -> Self {
        Self {
            repository: RepositorySource::Deferred(repository),
        }
    }

    /// Create a service over an already built repository
    pub fn with_repository(repository: Arc<dyn PaymentRepository>) -> Self {
        Self {
            repository: RepositorySource::Ready(repository),
        }
    }

    async fn repository(&self) -> Result<Arc<dyn PaymentRepository>> {
        match &self.repository {
            RepositorySource::Deferred(deferred) => deferred.get().await,
            RepositorySource::Ready(repository) => Ok(Arc::clone(repository)),
        }
    }
}

#[async_trait]
impl PaymentServiceInterface for PaymentService {
    async fn compute_derived_payment(&self, payment_id: i32) -> Result<Payment> {
        let repository = self.repository().await?;
        let payment = repository.get_payment(payment_id).await?;
        Ok(Payment::new(
            payment.id,
            payment.amount + DERIVED_PAYMENT_INCREMENT,
        ))
    }
}
