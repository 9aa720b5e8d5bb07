//! In-memory payment store
//!
//! Holds the payments of every partner database, keyed by database location.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use latebind_domain::error::{Error, Result};
use latebind_domain::ports::PaymentStore;
use latebind_domain::value_objects::Payment;
use tracing::debug;

use crate::constants::{
    IN_MEMORY_PROVIDER_NAME, PAYMENT_NOT_FOUND_MESSAGE, UNKNOWN_DATABASE_MESSAGE,
};

/// In-memory payment store
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentStore {
    databases: Arc<DashMap<String, Vec<Payment>>>,
    latency: Duration,
}

impl InMemoryPaymentStore {
    /// Create an empty store without latency
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay applied to every fetch
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Add payments to the database at `location`
    #[must_use]
    pub fn with_payments(
        self,
        location: impl Into<String>,
        payments: impl IntoIterator<Item = Payment>,
    ) -> Self {
        let location = location.into();
        for payment in payments {
            self.insert(location.clone(), payment);
        }
        self
    }

    /// Store a payment, replacing any payment with the same id at that location
    pub fn insert(&self, location: impl Into<String>, payment: Payment) {
        let mut database = self.databases.entry(location.into()).or_default();
        match database.iter().position(|existing| existing.id == payment.id) {
            Some(index) => database[index] = payment,
            None => database.push(payment),
        }
    }

    /// Number of payments stored at `location`
    pub fn payment_count(&self, location: &str) -> usize {
        self.databases.get(location).map_or(0, |db| db.len())
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn fetch_payment(&self, database_location: &str, payment_id: i32) -> Result<Payment> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let database = self.databases.get(database_location).ok_or_else(|| {
            Error::fetch(database_location, payment_id, UNKNOWN_DATABASE_MESSAGE)
        })?;
        let payment = database
            .iter()
            .find(|payment| payment.id == payment_id)
            .copied()
            .ok_or_else(|| {
                Error::fetch(database_location, payment_id, PAYMENT_NOT_FOUND_MESSAGE)
            })?;

        debug!(location = database_location, payment_id, "Payment fetched");
        Ok(payment)
    }

    fn provider_name(&self) -> &str {
        IN_MEMORY_PROVIDER_NAME
    }
}
