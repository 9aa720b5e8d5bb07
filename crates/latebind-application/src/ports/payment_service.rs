//! Payment Service Port

use async_trait::async_trait;
use latebind_domain::error::Result;
use latebind_domain::value_objects::Payment;

/// Payment use cases available to request handlers
#[async_trait]
pub trait PaymentServiceInterface: Send + Sync {
    /// Read a payment of the current partner and derive the returned value from it
    async fn compute_derived_payment(&self, payment_id: i32) -> Result<Payment>;
}
