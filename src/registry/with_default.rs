//! Registry that resolves missing keys through a default key.

use std::ops::Deref;

use parking_lot::RwLock;

use super::keyed::{Registry, RegistryFuture};

/// A [`Registry`] plus an optional default key.
///
/// Lookups that pass `None` resolve through the default key. With
/// `set_first_item_as_default`, the first key ever registered becomes the
/// default unless one was already chosen.
#[derive(Debug)]
pub struct RegistryWithDefaultKey<V> {
    registry: Registry<V>,
    default_key: RwLock<Option<String>>,
    set_first_item_as_default: bool,
}

impl<V> RegistryWithDefaultKey<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            registry: Registry::new(name),
            default_key: RwLock::new(None),
            set_first_item_as_default: false,
        }
    }

    pub fn with_default_key(self, key: impl Into<String>) -> Self {
        *self.default_key.write() = Some(key.into());
        self
    }

    pub fn set_first_item_as_default(mut self, enabled: bool) -> Self {
        self.set_first_item_as_default = enabled;
        self
    }

    /// Register `value`, possibly adopting `key` as the default.
    pub fn register(&self, key: impl Into<String>, value: V) -> &Self {
        let key = key.into();
        if self.set_first_item_as_default {
            let mut default_key = self.default_key.write();
            if default_key.is_none() {
                *default_key = Some(key.clone());
            }
        }
        self.registry.register(key, value);
        self
    }

    pub fn default_key(&self) -> Option<String> {
        self.default_key.read().clone()
    }

    pub fn set_default_key(&self, key: impl Into<String>) -> &Self {
        *self.default_key.write() = Some(key.into());
        self
    }

    pub fn clear_default_key(&self) -> &Self {
        *self.default_key.write() = None;
        self
    }

    /// Value for `key`, or for the default key when `key` is `None`.
    pub fn get_or_default(&self, key: Option<&str>) -> Option<V> {
        match key {
            Some(key) => self.registry.get(key),
            None => self
                .default_key()
                .and_then(|default| self.registry.get(&default)),
        }
    }

    /// Memoized future for `key`, or for the default key when `key` is `None`.
    ///
    /// With neither a key nor a default, the future rejects for the empty key.
    pub fn get_as_promise_or_default(&self, key: Option<&str>) -> RegistryFuture<V> {
        match key {
            Some(key) => self.registry.get_as_promise(key),
            None => {
                let default = self.default_key().unwrap_or_default();
                self.registry.get_as_promise(&default)
            }
        }
    }
}

impl<V> Deref for RegistryWithDefaultKey<V> {
    type Target = Registry<V>;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_resolves_through_default_key() {
        let registry = RegistryWithDefaultKey::new("schemes").with_default_key("b");
        registry.register("a", 1).register("b", 2);
        assert_eq!(registry.get_or_default(None), Some(2));
        assert_eq!(registry.get_or_default(Some("a")), Some(1));
    }

    #[test]
    fn explicit_missing_key_does_not_fall_back() {
        let registry = RegistryWithDefaultKey::new("schemes").with_default_key("a");
        registry.register("a", 1);
        assert_eq!(registry.get_or_default(Some("zzz")), None);
    }

    #[test]
    fn first_item_becomes_default() {
        let registry = RegistryWithDefaultKey::new("schemes").set_first_item_as_default(true);
        registry.register("first", 1).register("second", 2);
        assert_eq!(registry.default_key().as_deref(), Some("first"));
    }

    #[test]
    fn clearing_default_leaves_none_unresolved() {
        let registry = RegistryWithDefaultKey::new("schemes").with_default_key("a");
        registry.register("a", 1);
        registry.clear_default_key();
        assert_eq!(registry.get_or_default(None), None);
        // Deref exposes the plain registry operations.
        assert!(registry.has("a"));
    }

    #[tokio::test]
    async fn promise_without_any_default_rejects() {
        let registry: RegistryWithDefaultKey<u8> = RegistryWithDefaultKey::new("schemes");
        assert!(registry.get_as_promise_or_default(None).await.is_err());
    }
}
