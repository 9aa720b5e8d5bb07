//! # latebind Infrastructure Layer
//!
//! Cross-cutting technical concerns and the composition root.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | Tracing subscriber setup |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`di`] | Lifetimes, the singleton composition and request scopes |
//! | [`constants`] | Infrastructure constants |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{Composition, Lifetime, PaymentRoot, Registration, RequestScope};
pub use error_ext::ErrorContext;
