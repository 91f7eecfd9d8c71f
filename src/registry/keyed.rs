//! Keyed registry with memoized asynchronous lookups.
//!
//! Every `register` call stamps the key with a fresh generation. A cached
//! future is only handed out while its generation matches the key's current
//! one, so a re-registration is never answered with a stale value.

use std::collections::BTreeMap;
use std::fmt;

use futures::future::{self, BoxFuture, FutureExt, Shared};
use parking_lot::RwLock;
use tokio::sync::Notify;

use super::error::RegistryError;

/// Future returned by [`Registry::get_as_promise`]. Cloning it is cheap and
/// every clone resolves to the same result.
pub type RegistryFuture<V> = Shared<BoxFuture<'static, Result<V, RegistryError>>>;

struct Slot<V> {
    generation: u64,
    value: V,
}

struct CachedFuture<V> {
    generation: u64,
    future: RegistryFuture<V>,
}

struct Inner<V> {
    next_generation: u64,
    items: BTreeMap<String, Slot<V>>,
    promises: BTreeMap<String, CachedFuture<V>>,
}

/// Mapping from string key to value.
///
/// Uses interior mutability so a single instance can be shared behind an
/// `Arc` between the code that registers values and the code that reads them.
pub struct Registry<V> {
    name: String,
    inner: RwLock<Inner<V>>,
    registered: Notify,
}

impl<V> Registry<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create an empty registry. `name` only shows up in errors and logs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: RwLock::new(Inner {
                next_generation: 0,
                items: BTreeMap::new(),
                promises: BTreeMap::new(),
            }),
            registered: Notify::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if a value is registered under `key`.
    pub fn has(&self, key: &str) -> bool {
        self.inner.read().items.contains_key(key)
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Drops the memoized future for `key`; the next `get_as_promise` call
    /// builds a new one. Futures already handed out are unaffected.
    pub fn register(&self, key: impl Into<String>, value: V) -> &Self {
        let key = key.into();
        {
            let mut inner = self.inner.write();
            inner.next_generation += 1;
            let generation = inner.next_generation;
            inner.promises.remove(&key);
            let replaced = inner
                .items
                .insert(key.clone(), Slot { generation, value })
                .is_some();
            tracing::trace!(
                registry = %self.name,
                key = %key,
                generation,
                replaced,
                "Registered item"
            );
        }
        self.registered.notify_waiters();
        self
    }

    /// Value registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.read().items.get(key).map(|slot| slot.value.clone())
    }

    /// Future resolving to the value registered under `key`.
    ///
    /// The future is memoized per registration: repeated calls return clones
    /// of one shared future until `key` is registered again. For an unknown
    /// key the future resolves to [`RegistryError::NotRegistered`] and
    /// nothing is cached.
    pub fn get_as_promise(&self, key: &str) -> RegistryFuture<V> {
        let mut inner = self.inner.write();

        let (generation, value) = match inner.items.get(key) {
            Some(slot) => {
                if let Some(cached) = inner.promises.get(key) {
                    if cached.generation == slot.generation {
                        return cached.future.clone();
                    }
                }
                (slot.generation, slot.value.clone())
            }
            None => {
                tracing::debug!(registry = %self.name, key, "Promise requested for unregistered key");
                let err = RegistryError::NotRegistered {
                    registry: self.name.clone(),
                    key: key.to_string(),
                };
                return future::ready(Err(err)).boxed().shared();
            }
        };

        let future = future::ready(Ok(value)).boxed().shared();
        inner.promises.insert(
            key.to_string(),
            CachedFuture {
                generation,
                future: future.clone(),
            },
        );
        future
    }

    /// Wait until something is registered under `key` and return it.
    ///
    /// Resolves immediately when the key is already present.
    pub async fn wait_for(&self, key: &str) -> V {
        loop {
            let notified = self.registered.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(value) = self.get(key) {
                return value;
            }
            notified.await;
        }
    }

    /// Remove `key` and its memoized future. Returns the removed value.
    pub fn remove(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.write();
        inner.promises.remove(key);
        inner.items.remove(key).map(|slot| slot.value)
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.items.clear();
        inner.promises.clear();
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().items.keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<V> {
        self.inner
            .read()
            .items
            .values()
            .map(|slot| slot.value.clone())
            .collect()
    }

    pub fn entries(&self) -> Vec<(String, V)> {
        self.inner
            .read()
            .items
            .iter()
            .map(|(key, slot)| (key.clone(), slot.value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }
}

impl<V> fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("keys", &inner.items.keys().collect::<Vec<_>>())
            .field("memoized", &inner.promises.len())
            .finish()
    }
}
