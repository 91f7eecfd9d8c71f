//! Reducer trait for the state container.

use std::sync::Arc;

use super::action::Action;
use super::state::SliceState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state slice this reducer operates on.
    type State: SliceState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Actions this reducer does not handle must return `state` itself so
    /// that `Arc::ptr_eq(&before, &after)` holds.
    fn reduce(state: Arc<Self::State>, action: &Self::Action) -> Arc<Self::State>;
}
