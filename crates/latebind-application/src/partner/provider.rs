//! Scoped partner context provider

use std::sync::Arc;

use async_trait::async_trait;
use latebind_domain::constants::PARTNER_NAME;
use latebind_domain::error::{Error, Result};
use latebind_domain::ports::PartnerContextService;
use latebind_domain::value_objects::PartnerContext;
use tracing::debug;

use crate::deferred::{DeferredCell, MemoizedAsyncResolver};
use crate::ports::CurrentPartnerProvider;

/// Per-scope provider of the current partner context
///
/// Chains a write-once partner name with a memoized directory lookup. The
/// resolver key is always read from the cell, and the cell accepts a single
/// name, so a name that lost a concurrent provide can never become the key.
pub struct ScopedContextProvider {
    directory: Arc<dyn PartnerContextService>,
    partner_name: DeferredCell<String>,
    context: MemoizedAsyncResolver<String, PartnerContext>,
}

impl ScopedContextProvider {
    /// Create a provider for a new scope
    pub fn new(directory: Arc<dyn PartnerContextService>) -> Self {
        Self {
            directory,
            partner_name: DeferredCell::new(PARTNER_NAME),
            context: MemoizedAsyncResolver::new("partner_context"),
        }
    }

    /// Partner name, if already provided
    pub fn partner_name(&self) -> Option<&str> {
        self.partner_name.try_read().map(String::as_str)
    }
}

#[async_trait]
impl CurrentPartnerProvider for ScopedContextProvider {
    fn provide_partner_name(&self, partner_name: &str) -> Result<()> {
        if partner_name.trim().is_empty() {
            return Err(Error::invalid_argument("Partner name cannot be empty"));
        }
        self.partner_name.provide(partner_name.to_string())?;
        debug!(partner = partner_name, "Partner name provided for scope");
        Ok(())
    }

    async fn partner_context(&self) -> Result<PartnerContext> {
        let directory = Arc::clone(&self.directory);
        self.context
            .resolve_from(&self.partner_name, move |name| async move {
                directory.get_partner_context(&name).await
            })
            .await
    }
}

impl std::fmt::Debug for ScopedContextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedContextProvider")
            .field("directory", &self.directory.provider_name())
            .field("partner_name", &self.partner_name.try_read())
            .field("context", &self.context)
            .finish()
    }
}
