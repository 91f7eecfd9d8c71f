//! Base trait for actions dispatched through a store.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User gestures (rename, star, expand)
/// - System events (query responses, timers)
/// - Bootstrap-time corrections
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {
    /// Short discriminant used in log events.
    fn kind(&self) -> &'static str;
}
