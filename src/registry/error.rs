use thiserror::Error;

/// Errors surfaced by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Nothing is registered under the requested key.
    #[error("Item with key \"{key}\" is not registered in registry '{registry}'")]
    NotRegistered { registry: String, key: String },
}
