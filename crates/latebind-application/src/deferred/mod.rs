//! Deferred values and memoized resolution
//!
//! The two primitives every scoped provider is built from:
//!
//! | Type | Role |
//! |------|------|
//! | [`DeferredCell`] | Single write, many reads; errors before the write and on a second write |
//! | [`MemoizedAsyncResolver`] | Derives a value from a key once per scope, sharing the in-flight future |

pub mod cell;
pub mod resolver;

pub use cell::DeferredCell;
pub use resolver::MemoizedAsyncResolver;
