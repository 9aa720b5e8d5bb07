//! Synchronous execution context injector

use latebind_domain::constants::EXECUTION_CONTEXT;
use latebind_domain::error::Result;
use latebind_domain::value_objects::ExecutionContext;

use crate::deferred::DeferredCell;

/// Holds the execution context injected into the current scope
///
/// Injecting `None` is a valid injection: readers then run without a
/// context. Reading before any injection is an error.
#[derive(Debug)]
pub struct ExecutionContextInjector {
    context: DeferredCell<Option<ExecutionContext>>,
}

impl ExecutionContextInjector {
    /// Create an injector for a new scope
    pub fn new() -> Self {
        Self {
            context: DeferredCell::new(EXECUTION_CONTEXT),
        }
    }

    /// Inject the execution context. Only once per scope.
    pub fn inject(&self, context: Option<ExecutionContext>) -> Result<()> {
        self.context.provide(context)
    }

    /// Get the injected execution context
    pub fn injected_context(&self) -> Result<Option<ExecutionContext>> {
        self.context.read().copied()
    }
}

impl Default for ExecutionContextInjector {
    fn default() -> Self {
        Self::new()
    }
}
