//! Keyed "last write wins" guard for overlapping asynchronous operations.
//!
//! Every operation registers under a key when it starts. Only the most
//! recently registered operation for a key may deliver its result; older
//! ones resolve to [`LatestError::Superseded`].

use std::{
    collections::HashMap,
    future::Future,
    hash::Hash,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard,
    },
};

/// Failure of a guarded operation.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LatestError<E> {
    /// A newer operation was registered under the same key.
    #[error("Superseded by a newer operation")]
    Superseded,
    /// The operation failed while it was still the latest one.
    #[error("Operation failed")]
    Failed(E),
}

/// Registry of the latest operation token for each key.
#[derive(Debug)]
pub struct Latest<K> {
    tokens: Mutex<HashMap<K, u64>>,
    counter: AtomicU64,
}

impl<K> Default for Latest<K> {
    fn default() -> Self {
        Self {
            tokens: Mutex::new(HashMap::new()),
            counter: AtomicU64::new(0),
        }
    }
}

impl<K> Latest<K>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `future` under `key`.
    pub async fn run<F, T, E>(&self, key: K, future: F) -> Result<T, LatestError<E>>
    where
        F: Future<Output = Result<T, E>>,
    {
        let token = self.register(&key);
        let result = future.await;
        self.deliver(&key, token, result)
    }

    /// Await `arg`, then run `f` on its value if the operation is still the
    /// latest one under `key`.
    pub async fn then<A, V, F, Fut, T, E>(&self, key: K, arg: A, f: F) -> Result<T, LatestError<E>>
    where
        A: Future<Output = Result<V, E>>,
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let token = self.register(&key);
        let value = match arg.await {
            Ok(value) => value,
            Err(error) => return self.deliver(&key, token, Err(error)),
        };
        if !self.is_current(&key, token) {
            tracing::debug!("Skipping superseded operation");
            return Err(LatestError::Superseded);
        }
        let result = f(value).await;
        self.deliver(&key, token, result)
    }

    /// Await `future`; on failure, run `f` on the error if the operation is
    /// still the latest one under `key`.
    pub async fn recover<F, R, Fut, T, E>(
        &self,
        key: K,
        future: F,
        f: R,
    ) -> Result<T, LatestError<E>>
    where
        F: Future<Output = Result<T, E>>,
        R: FnOnce(E) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let token = self.register(&key);
        let error = match future.await {
            Ok(value) => return self.deliver(&key, token, Ok(value)),
            Err(error) => error,
        };
        if !self.is_current(&key, token) {
            tracing::debug!("Skipping superseded recovery");
            return Err(LatestError::Superseded);
        }
        let result = f(error).await;
        self.deliver(&key, token, result)
    }

    /// Register a new operation under `key` and return its token.
    fn register(&self, key: &K) -> u64 {
        let token = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.lock().insert(key.clone(), token);
        token
    }

    /// Check if `token` is still the latest one registered under `key`.
    fn is_current(&self, key: &K, token: u64) -> bool {
        self.lock().get(key).is_some_and(|t| *t == token)
    }

    fn deliver<T, E>(&self, key: &K, token: u64, result: Result<T, E>) -> Result<T, LatestError<E>> {
        if !self.is_current(key, token) {
            tracing::debug!("Discarding result of superseded operation");
            return Err(LatestError::Superseded);
        }
        result.map_err(LatestError::Failed)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, u64>> {
        // A token map is never left half-written, so a poisoned lock is safe
        // to reuse.
        self.tokens
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
