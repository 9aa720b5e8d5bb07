//! Execution context injection
//!
//! The execution context of a scope is created by the caller after the scope's
//! services were constructed. Injectors hold it in a deferred cell; services
//! read it lazily, once they actually need it.

pub mod async_injector;
pub mod injector;
pub mod sample;

pub use async_injector::ExecutionContextAsyncInjector;
pub use injector::ExecutionContextInjector;
pub use sample::{SampleAsyncService, SampleService};
