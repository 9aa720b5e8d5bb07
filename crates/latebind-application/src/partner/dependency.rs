//! Dependencies derived from the resolved partner context

use std::sync::Arc;

use latebind_domain::error::Result;
use latebind_domain::ports::PaymentRepository;
use latebind_domain::value_objects::PartnerContext;
use tracing::debug;

use crate::deferred::MemoizedAsyncResolver;
use crate::ports::CurrentPartnerProvider;

/// Builds a dependency from a resolved partner context
pub type DependencyBuilder<T> = Arc<dyn Fn(&PartnerContext) -> Result<T> + Send + Sync>;

/// Scope-lifetime dependency built lazily from the current partner context
///
/// The first [`get`](Self::get) awaits the partner context and runs the
/// builder; later calls return the same instance. Context failures are
/// returned as-is and are already memoized by the partner provider.
pub struct DerivedDependency<T> {
    partner: Arc<dyn CurrentPartnerProvider>,
    build: DependencyBuilder<T>,
    resolver: MemoizedAsyncResolver<PartnerContext, T>,
}

/// Payment repository bound to the database of the current partner
pub type DeferredPaymentRepository = DerivedDependency<Arc<dyn PaymentRepository>>;

impl<T> DerivedDependency<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an unbuilt dependency for a new scope
    pub fn new(partner: Arc<dyn CurrentPartnerProvider>, build: DependencyBuilder<T>) -> Self {
        Self {
            partner,
            build,
            resolver: MemoizedAsyncResolver::new("derived_dependency"),
        }
    }

    /// Get the dependency, building it on first use
    pub async fn get(&self) -> Result<T> {
        let context = self.partner.partner_context().await?;
        let build = Arc::clone(&self.build);
        self.resolver
            .resolve(context, move |context| async move {
                debug!(
                    partner = context.name(),
                    location = context.database_location(),
                    "Building scoped dependency"
                );
                build(&context)
            })
            .await
    }
}
