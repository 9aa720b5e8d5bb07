//! Payment Repository Port

use crate::error::Result;
use crate::value_objects::Payment;
use async_trait::async_trait;

/// Payment access bound to a single database location
///
/// A repository is derived from a resolved partner context and lives as long
/// as the scope that built it.
#[async_trait]
pub trait PaymentRepository: Send + Sync + std::fmt::Debug {
    /// Get a payment by id
    async fn get_payment(&self, payment_id: i32) -> Result<Payment>;

    /// Database location this repository reads from
    fn database_location(&self) -> &str;
}
