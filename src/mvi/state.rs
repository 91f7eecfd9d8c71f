//! Base trait for state slices.

/// Marker trait for state slices.
///
/// Slices should be:
/// - Immutable (updated by building a new value, sharing unchanged parts)
/// - Self-contained (all data a consumer needs to render it)
/// - Comparable (PartialEq for tests and diagnostics)
pub trait SliceState: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
