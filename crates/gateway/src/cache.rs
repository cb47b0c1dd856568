use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// Identifies one memoized call: operation name plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: &'static str,
    args: Vec<String>,
}

impl CacheKey {
    pub fn new<I, S>(operation: &'static str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            operation,
            args: args.into_iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    expires_at: Instant,
}

/// Time-bounded memoization. Each entry carries its own expiry; expired
/// entries are never returned and are dropped lazily.
#[derive(Default)]
pub struct TtlCache {
    entries: Mutex<HashMap<CacheKey, Entry>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<V>(&self, key: &CacheKey) -> Option<V>
    where
        V: Clone + Send + Sync + 'static,
    {
        let mut entries = self.entries.lock();
        let now = Instant::now();

        let expired = match entries.get(key) {
            Some(entry) if entry.expires_at > now => {
                tracing::trace!(operation = key.operation, "cache hit");
                return entry.value.downcast_ref::<V>().cloned();
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.remove(key);
            tracing::trace!(operation = key.operation, "cache entry expired");
        }
        None
    }

    pub fn insert<V>(&self, key: CacheKey, value: V, ttl: Duration)
    where
        V: Send + Sync + 'static,
    {
        let expires_at = Instant::now() + ttl;
        self.entries.lock().insert(
            key,
            Entry {
                value: Arc::new(value),
                expires_at,
            },
        );
    }

    /// Return the cached value or run `fetch`, caching only successes.
    /// The lock is not held while `fetch` runs.
    pub async fn get_or_try_insert_with<V, E, F, Fut>(
        &self,
        key: CacheKey,
        ttl: Duration,
        fetch: F,
    ) -> Result<V, E>
    where
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get::<V>(&key) {
            return Ok(hit);
        }

        tracing::trace!(operation = key.operation, "cache miss");
        let value = fetch().await?;
        self.insert(key, value.clone(), ttl);
        Ok(value)
    }

    pub fn invalidate(&self, key: &CacheKey) -> bool {
        self.entries.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Drop expired entries, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
