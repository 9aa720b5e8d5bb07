//! # latebind Domain Layer
//!
//! Core types shared by every layer: the error model, immutable value objects
//! and the port traits that external collaborators implement.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error enum and `Result` alias |
//! | [`value_objects`] | `PartnerContext`, `Payment`, `ExecutionContext` |
//! | [`ports`] | Partner directory, payment store and repository contracts |
//! | [`constants`] | Domain-level constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use value_objects::{ExecutionContext, PartnerContext, Payment};
