//! Execution context value object

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Runtime execution context known only once a scope has started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Execution context identifier
    pub id: Uuid,
}

impl ExecutionContext {
    /// Create an execution context with the given id
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }

    /// Create an execution context with a random id
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4())
    }
}
