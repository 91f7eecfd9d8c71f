//! Named registries for shared resources (control panels, plugins, schemes).
//!
//! Registries are plain values. Construct one, wrap it in an `Arc` and hand
//! it to whoever needs it; there is no process-wide instance.

mod error;
mod keyed;
mod with_default;

pub use error::RegistryError;
pub use keyed::{Registry, RegistryFuture};
pub use with_default::RegistryWithDefaultKey;
