//! Composition root
//!
//! Wiring is explicit object-graph construction, no container:
//!
//! ```text
//! Composition (singletons: directory, store, repository factory)
//! └── RequestScope (scoped: partner provider, deferred repository, injectors)
//!     ├── payment_service()        transient, new per call
//!     └── resolve_payment_root()   per-resolve, one service per root
//! ```

pub mod composition;
pub mod lifetime;
pub mod scope;

pub use composition::Composition;
pub use lifetime::{Lifetime, Registration};
pub use scope::{PaymentRoot, RequestScope};
