//! Single-assignment cell for values known only after a scope has started

use std::fmt;
use std::sync::OnceLock;

use latebind_domain::error::{Error, Result};
use tracing::{debug, warn};

/// Scope-owned holder accepting exactly one write and any number of reads
///
/// Concurrent [`provide`](Self::provide) calls race on the inner lock: the
/// first write wins and every other caller gets
/// [`Error::AlreadyProvided`]. Reads before the write get
/// [`Error::NotProvided`], never a default value.
///
/// # Example
///
/// ```
/// use latebind_application::deferred::DeferredCell;
///
/// let cell = DeferredCell::new("Partner name");
/// assert!(cell.read().is_err());
///
/// cell.provide("yesncf".to_string()).unwrap();
/// assert_eq!(cell.read().unwrap(), "yesncf");
/// assert!(cell.provide("helloexo".to_string()).is_err());
/// ```
pub struct DeferredCell<T> {
    label: &'static str,
    value: OnceLock<T>,
}

impl<T> DeferredCell<T> {
    /// Create an empty cell; `label` names the value in errors and logs
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: OnceLock::new(),
        }
    }

    /// Provide the value. Fails if the cell was already written.
    pub fn provide(&self, value: T) -> Result<()> {
        if self.value.set(value).is_err() {
            warn!(cell = self.label, "Rejected second provide in the same scope");
            return Err(Error::already_provided(self.label));
        }
        debug!(cell = self.label, "Deferred value provided");
        Ok(())
    }

    /// Non-blocking read
    pub fn try_read(&self) -> Option<&T> {
        self.value.get()
    }

    /// Read the value, failing if it has not been provided yet
    pub fn read(&self) -> Result<&T> {
        self.value
            .get()
            .ok_or_else(|| Error::not_provided(self.label))
    }

    /// Whether the value has been provided
    pub fn is_provided(&self) -> bool {
        self.value.get().is_some()
    }

    /// Label used in errors and logs
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<T: fmt::Debug> fmt::Debug for DeferredCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredCell")
            .field("label", &self.label)
            .field("value", &self.value.get())
            .finish()
    }
}
