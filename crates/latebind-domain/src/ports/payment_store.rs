//! Payment Store Port

use crate::error::Result;
use crate::value_objects::Payment;
use async_trait::async_trait;

/// Storage collaborator holding the payments of every partner database
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Fetch a payment from the database at `database_location`
    async fn fetch_payment(&self, database_location: &str, payment_id: i32) -> Result<Payment>;

    /// Get the name of this store provider
    fn provider_name(&self) -> &str;
}
