//! Memoized asynchronous resolution
//!
//! Turns a key into a derived value at most once per instance. Concurrent
//! callers share a single in-flight future; the outcome, success or failure,
//! is cached for the rest of the scope.
//!
//! ```text
//! NotStarted ──resolve(k)──▶ InFlight(k, shared) ──done──▶ Resolved(k, Ok | Err)
//!                                 ▲                              │
//!                   resolve(k) joins the shared future     terminal
//! ```

use std::fmt;
use std::future::Future;

use futures::future::{BoxFuture, FutureExt, Shared};
use latebind_domain::error::{Error, Result};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::cell::DeferredCell;

type SharedResolution<T> = Shared<BoxFuture<'static, Result<T>>>;

enum Resolution<K, T> {
    NotStarted,
    InFlight { key: K, future: SharedResolution<T> },
    Resolved { key: K, result: Result<T> },
}

/// What a caller does once the check-and-set has been made under the lock
enum Step<T> {
    Start,
    Join(SharedResolution<T>),
    Bypass,
}

/// Per-scope memoizing wrapper around an asynchronous derivation function
///
/// The lock only covers the check-and-set of the state; the derivation itself
/// runs outside of it.
///
/// Key handling:
/// - same key as the memo: join the in-flight future or return the cached result
/// - different key while the first derivation is still in flight: the first key
///   keeps the memo slot, the new key is derived for that caller alone
/// - different key after a result is cached: [`Error::ScopeMismatch`]
pub struct MemoizedAsyncResolver<K, T> {
    label: &'static str,
    state: Mutex<Resolution<K, T>>,
}

impl<K, T> MemoizedAsyncResolver<K, T>
where
    K: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Create an unresolved resolver; `label` names it in errors and logs
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            state: Mutex::new(Resolution::NotStarted),
        }
    }

    /// Resolve `key`, invoking `derive` only if nothing is cached or in flight for it
    pub async fn resolve<F, Fut>(&self, key: K, derive: F) -> Result<T>
    where
        F: FnOnce(K) -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let mut state = self.state.lock().await;
        let step = match &*state {
            Resolution::Resolved {
                key: resolved,
                result,
            } => {
                if *resolved == key {
                    return result.clone();
                }
                warn!(resolver = self.label, resolved = ?resolved, requested = ?key, "Rejected request for a different key");
                return Err(Error::scope_mismatch(
                    format!("{resolved:?}"),
                    format!("{key:?}"),
                ));
            }
            Resolution::InFlight {
                key: pending,
                future,
            } => {
                if *pending == key {
                    Step::Join(future.clone())
                } else {
                    warn!(resolver = self.label, pending = ?pending, requested = ?key, "Key changed while resolving, deriving uncached");
                    Step::Bypass
                }
            }
            Resolution::NotStarted => Step::Start,
        };

        let future = match step {
            Step::Start => {
                debug!(resolver = self.label, key = ?key, "Starting derivation");
                let future = derive(key.clone()).boxed().shared();
                *state = Resolution::InFlight {
                    key: key.clone(),
                    future: future.clone(),
                };
                future
            }
            Step::Join(future) => {
                debug!(resolver = self.label, key = ?key, "Joining in-flight derivation");
                future
            }
            Step::Bypass => {
                drop(state);
                return derive(key).await;
            }
        };
        drop(state);

        let result = future.await;

        let mut state = self.state.lock().await;
        if matches!(&*state, Resolution::InFlight { key: pending, .. } if *pending == key) {
            debug!(resolver = self.label, key = ?key, ok = result.is_ok(), "Derivation cached");
            *state = Resolution::Resolved {
                key,
                result: result.clone(),
            };
        }
        result
    }

    /// Resolve the value of `cell`, failing with [`Error::NotProvided`] when it is empty
    pub async fn resolve_from<F, Fut>(&self, cell: &DeferredCell<K>, derive: F) -> Result<T>
    where
        F: FnOnce(K) -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let key = cell.read()?.clone();
        self.resolve(key, derive).await
    }

    /// Cached outcome, if the derivation has completed
    pub async fn cached(&self) -> Option<Result<T>> {
        match &*self.state.lock().await {
            Resolution::Resolved { result, .. } => Some(result.clone()),
            _ => None,
        }
    }

    /// Whether a derivation is currently in flight
    pub async fn is_in_flight(&self) -> bool {
        matches!(&*self.state.lock().await, Resolution::InFlight { .. })
    }
}

impl<K, T> fmt::Debug for MemoizedAsyncResolver<K, T>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.state.try_lock() {
            Ok(state) => match &*state {
                Resolution::NotStarted => "not started".to_string(),
                Resolution::InFlight { key, .. } => format!("in flight ({key:?})"),
                Resolution::Resolved { key, result } => {
                    format!("resolved ({key:?}, ok: {})", result.is_ok())
                }
            },
            Err(_) => "locked".to_string(),
        };
        f.debug_struct("MemoizedAsyncResolver")
            .field("label", &self.label)
            .field("state", &phase)
            .finish()
    }
}
