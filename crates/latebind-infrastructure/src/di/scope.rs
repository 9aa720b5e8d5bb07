//! Request scope
//!
//! A scope owns exactly one instance of each scoped entity. Disposal hooks
//! run once, on [`RequestScope::dispose`] or when the scope is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use latebind_application::execution::{
    ExecutionContextAsyncInjector, ExecutionContextInjector, SampleAsyncService, SampleService,
};
use latebind_application::partner::{DeferredPaymentRepository, ScopedContextProvider};
use latebind_application::ports::{CurrentPartnerProvider, PaymentServiceInterface};
use latebind_application::services::PaymentService;
use latebind_domain::ports::{PartnerContextService, PaymentStore};
use latebind_providers::located_repository_builder;
use tracing::{debug, info};
use uuid::Uuid;

type DisposeHook = Box<dyn FnOnce() + Send>;

/// Object graph resolved in one go; its payment service is shared inside it
#[derive(Clone)]
pub struct PaymentRoot {
    /// Service answering payment requests
    pub service: Arc<dyn PaymentServiceInterface>,
    /// Service used for auditing the same requests
    pub audit_service: Arc<dyn PaymentServiceInterface>,
}

impl PaymentRoot {
    /// Whether both members hold the same service instance
    pub fn shares_service(&self) -> bool {
        Arc::ptr_eq(&self.service, &self.audit_service)
    }
}

/// Lifetime boundary of one logical request
pub struct RequestScope {
    id: Uuid,
    partner: Arc<ScopedContextProvider>,
    payment_repository: Arc<DeferredPaymentRepository>,
    execution: Arc<ExecutionContextInjector>,
    async_execution: Arc<ExecutionContextAsyncInjector>,
    hooks: Mutex<Vec<DisposeHook>>,
    disposed: AtomicBool,
}

impl RequestScope {
    /// Build the scoped graph over the composition's singletons
    pub fn new(directory: Arc<dyn PartnerContextService>, store: Arc<dyn PaymentStore>) -> Self {
        let id = Uuid::new_v4();
        let partner = Arc::new(ScopedContextProvider::new(directory));
        let payment_repository = Arc::new(DeferredPaymentRepository::new(
            Arc::clone(&partner) as Arc<dyn CurrentPartnerProvider>,
            located_repository_builder(store),
        ));
        info!(scope = %id, "Request scope created");
        Self {
            id,
            partner,
            payment_repository,
            execution: Arc::new(ExecutionContextInjector::new()),
            async_execution: Arc::new(ExecutionContextAsyncInjector::new()),
            hooks: Mutex::new(Vec::new()),
            disposed: AtomicBool::new(false),
        }
    }

    /// Scope identifier, used in logs
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Partner provider of this scope
    pub fn current_partner_provider(&self) -> Arc<dyn CurrentPartnerProvider> {
        Arc::clone(&self.partner) as Arc<dyn CurrentPartnerProvider>
    }

    /// Partner name provided to this scope, if any
    pub fn partner_name(&self) -> Option<&str> {
        self.partner.partner_name()
    }

    /// Payment repository of this scope, built on first use
    pub fn payment_repository(&self) -> Arc<DeferredPaymentRepository> {
        Arc::clone(&self.payment_repository)
    }

    /// New payment service over the scope's repository
    pub fn payment_service(&self) -> Arc<dyn PaymentServiceInterface> {
        Arc::new(PaymentService::new(self.payment_repository()))
    }

    /// Resolve a [`PaymentRoot`]; every member of one root shares a service
    pub fn resolve_payment_root(&self) -> PaymentRoot {
        let service = self.payment_service();
        PaymentRoot {
            audit_service: Arc::clone(&service),
            service,
        }
    }

    /// Synchronous execution context injector of this scope
    pub fn execution_context_injector(&self) -> Arc<ExecutionContextInjector> {
        Arc::clone(&self.execution)
    }

    /// Asynchronous execution context injector of this scope
    pub fn execution_context_async_injector(&self) -> Arc<ExecutionContextAsyncInjector> {
        Arc::clone(&self.async_execution)
    }

    /// New service reading the scope's execution context
    pub fn sample_service(&self) -> SampleService {
        SampleService::new(self.execution_context_injector())
    }

    /// New service awaiting the scope's asynchronously built execution context
    pub fn sample_async_service(&self) -> SampleAsyncService {
        SampleAsyncService::new(self.execution_context_async_injector())
    }

    /// Register a hook run when the scope is disposed
    ///
    /// Hooks run in reverse registration order. A hook registered after
    /// disposal runs immediately.
    pub fn on_dispose<F>(&self, hook: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut hooks = self.hooks.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_disposed() {
            drop(hooks);
            hook();
            return;
        }
        hooks.push(Box::new(hook));
    }

    /// Run the disposal hooks. Later calls do nothing.
    pub fn dispose(&self) {
        let hooks = {
            let mut hooks = self.hooks.lock().unwrap_or_else(PoisonError::into_inner);
            if self.disposed.swap(true, Ordering::SeqCst) {
                return;
            }
            std::mem::take(&mut *hooks)
        };
        debug!(scope = %self.id, hooks = hooks.len(), "Running disposal hooks");
        for hook in hooks.into_iter().rev() {
            hook();
        }
        info!(scope = %self.id, "Request scope disposed");
    }

    /// Whether the scope has been disposed
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for RequestScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestScope")
            .field("id", &self.id)
            .field("partner", &self.partner)
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}
