//! Partner Directory Port
//!
//! Defines the contract for looking up the database location of a partner.

use crate::error::Result;
use crate::value_objects::PartnerContext;
use async_trait::async_trait;

/// Partner directory interface
///
/// Implementations fail with [`Error::Lookup`](crate::Error::Lookup) when the
/// partner is unknown.
#[async_trait]
pub trait PartnerContextService: Send + Sync {
    /// Resolve the context of a partner
    async fn get_partner_context(&self, partner_name: &str) -> Result<PartnerContext>;

    /// Get the name of this directory provider
    fn provider_name(&self) -> &str;
}
