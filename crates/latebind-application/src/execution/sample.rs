//! Services consuming an injected execution context

use std::sync::Arc;

use latebind_domain::error::Result;
use latebind_domain::value_objects::ExecutionContext;

use super::{ExecutionContextAsyncInjector, ExecutionContextInjector};

/// Service constructed before the execution context is known
#[derive(Debug, Clone)]
pub struct SampleService {
    injector: Arc<ExecutionContextInjector>,
}

impl SampleService {
    /// Create a service reading from the scope's injector
    pub fn new(injector: Arc<ExecutionContextInjector>) -> Self {
        Self { injector }
    }

    /// Execution context of the current scope
    pub fn execution_context(&self) -> Result<Option<ExecutionContext>> {
        self.injector.injected_context()
    }
}

/// Service awaiting an execution context built asynchronously
#[derive(Debug, Clone)]
pub struct SampleAsyncService {
    injector: Arc<ExecutionContextAsyncInjector>,
}

impl SampleAsyncService {
    /// Create a service reading from the scope's async injector
    pub fn new(injector: Arc<ExecutionContextAsyncInjector>) -> Self {
        Self { injector }
    }

    /// Execution context of the current scope
    pub async fn execution_context(&self) -> Result<ExecutionContext> {
        self.injector.injected_context().await
    }
}
