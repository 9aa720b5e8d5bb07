//! Asynchronous execution context injector

use std::time::Duration;

use latebind_domain::constants::EXECUTION_CONTEXT;
use latebind_domain::error::Result;
use latebind_domain::value_objects::ExecutionContext;
use uuid::Uuid;

use crate::deferred::{DeferredCell, MemoizedAsyncResolver};

/// Builds the execution context of a scope from an injected id
///
/// Only the id is known when the request starts; turning it into a full
/// context is an asynchronous step that runs once per scope.
#[derive(Debug)]
pub struct ExecutionContextAsyncInjector {
    context_id: DeferredCell<Uuid>,
    context: MemoizedAsyncResolver<Uuid, ExecutionContext>,
    load_delay: Duration,
}

impl ExecutionContextAsyncInjector {
    /// Create an injector for a new scope
    pub fn new() -> Self {
        Self::with_load_delay(Duration::from_millis(1))
    }

    /// Create an injector whose context load takes `load_delay`
    pub fn with_load_delay(load_delay: Duration) -> Self {
        Self {
            context_id: DeferredCell::new(EXECUTION_CONTEXT),
            context: MemoizedAsyncResolver::new("execution_context"),
            load_delay,
        }
    }

    /// Inject the execution context id. Only once per scope.
    pub fn inject(&self, context_id: Uuid) -> Result<()> {
        self.context_id.provide(context_id)
    }

    /// Get the execution context built from the injected id
    pub async fn injected_context(&self) -> Result<ExecutionContext> {
        let delay = self.load_delay;
        self.context
            .resolve_from(&self.context_id, move |id| async move {
                tokio::time::sleep(delay).await;
                Ok(ExecutionContext::new(id))
            })
            .await
    }
}

impl Default for ExecutionContextAsyncInjector {
    fn default() -> Self {
        Self::new()
    }
}
