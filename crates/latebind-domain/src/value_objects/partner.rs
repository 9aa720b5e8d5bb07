//! Partner context value object
//!
//! The partner context is the richer fact derived from a partner name once a
//! request has started. It is used as a cache key by scoped resolvers, so
//! identity is the partner name alone.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Resolved partner with the location of its database
///
/// Two contexts are equal when their names are equal, whatever their
/// locations. A resolver holding a context for another name must not serve it.
///
/// # Example
///
/// ```
/// use latebind_domain::value_objects::PartnerContext;
///
/// let ctx = PartnerContext::new("yesncf", "{Server=1.1.1.1;DatabaseID=Yesncf}");
/// assert_eq!(ctx.name(), "yesncf");
/// assert_eq!(ctx, PartnerContext::new("yesncf", "elsewhere"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerContext {
    name: String,
    database_location: String,
}

impl PartnerContext {
    /// Create a new partner context
    pub fn new(name: impl Into<String>, database_location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database_location: database_location.into(),
        }
    }

    /// Partner name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database location of the partner
    pub fn database_location(&self) -> &str {
        &self.database_location
    }
}

impl PartialEq for PartnerContext {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PartnerContext {}

impl Hash for PartnerContext {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
