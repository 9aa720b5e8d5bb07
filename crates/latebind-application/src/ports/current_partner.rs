//! Current Partner Provider Port
//!
//! The partner of a request is only known once the request has started. The
//! request handler provides the partner name; collaborators built earlier in
//! the same scope read the resolved context through this port.

use async_trait::async_trait;
use latebind_domain::error::Result;
use latebind_domain::value_objects::PartnerContext;

/// Scoped access to the partner of the current request
#[async_trait]
pub trait CurrentPartnerProvider: Send + Sync {
    /// Provide the partner name. Only once per scope.
    fn provide_partner_name(&self, partner_name: &str) -> Result<()>;

    /// Resolve the partner context. The lookup runs once per scope; every
    /// call after the first returns the same outcome.
    async fn partner_context(&self) -> Result<PartnerContext>;
}
