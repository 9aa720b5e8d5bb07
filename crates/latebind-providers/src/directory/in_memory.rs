//! In-memory partner directory
//!
//! Maps partner names to database locations. Lookups can be slowed down by a
//! fixed latency to behave like a remote registry.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use latebind_domain::error::{Error, Result};
use latebind_domain::ports::PartnerContextService;
use latebind_domain::value_objects::PartnerContext;
use tracing::debug;

use crate::constants::{IN_MEMORY_PROVIDER_NAME, UNKNOWN_PARTNER_MESSAGE};

/// In-memory partner directory
///
/// # Example
///
/// ```
/// use latebind_providers::InMemoryPartnerDirectory;
///
/// let directory = InMemoryPartnerDirectory::new()
///     .with_partner("yesncf", "{Server=1.1.1.1;DatabaseID=Yesncf}");
/// assert_eq!(directory.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryPartnerDirectory {
    partners: Arc<DashMap<String, String>>,
    latency: Duration,
}

impl InMemoryPartnerDirectory {
    /// Create an empty directory without latency
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay applied to every lookup
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Add a partner
    #[must_use]
    pub fn with_partner(self, name: impl Into<String>, location: impl Into<String>) -> Self {
        self.insert(name, location);
        self
    }

    /// Register or replace a partner's database location
    pub fn insert(&self, name: impl Into<String>, location: impl Into<String>) {
        self.partners.insert(name.into(), location.into());
    }

    /// Number of registered partners
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// Whether no partner is registered
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

impl<N, L> FromIterator<(N, L)> for InMemoryPartnerDirectory
where
    N: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, L)>>(iter: I) -> Self {
        let directory = Self::new();
        for (name, location) in iter {
            directory.insert(name, location);
        }
        directory
    }
}

#[async_trait]
impl PartnerContextService for InMemoryPartnerDirectory {
    async fn get_partner_context(&self, partner_name: &str) -> Result<PartnerContext> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let location = self
            .partners
            .get(partner_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::lookup(partner_name, UNKNOWN_PARTNER_MESSAGE))?;

        debug!(partner = partner_name, location = %location, "Partner resolved");
        Ok(PartnerContext::new(partner_name, location))
    }

    fn provider_name(&self) -> &str {
        IN_MEMORY_PROVIDER_NAME
    }
}
