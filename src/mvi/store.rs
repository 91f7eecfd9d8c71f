//! Single-owner store that applies a reducer and publishes snapshots.

use std::sync::Arc;

use tokio::sync::watch;

use super::action::Action;
use super::reducer::Reducer;

/// Holds the current state of a reducer and notifies subscribers on change.
///
/// Dispatch is synchronous and runs to completion. Subscribers only wake
/// when a dispatch produced a new snapshot.
pub struct Store<R: Reducer> {
    state: Arc<R::State>,
    sender: watch::Sender<Arc<R::State>>,
    dispatched: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self::from_arc(Arc::new(initial))
    }

    pub fn from_arc(initial: Arc<R::State>) -> Self {
        let (sender, _) = watch::channel(Arc::clone(&initial));
        Self {
            state: initial,
            sender,
            dispatched: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<R::State> {
        Arc::clone(&self.state)
    }

    /// Number of actions dispatched so far, changed or not.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Run the reducer. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: R::Action) -> bool {
        self.dispatched += 1;
        let kind = action.kind();
        let next = R::reduce(Arc::clone(&self.state), &action);

        if Arc::ptr_eq(&next, &self.state) {
            tracing::trace!(action = kind, seq = self.dispatched, "Action left state unchanged");
            return false;
        }

        tracing::debug!(action = kind, seq = self.dispatched, "State updated");
        self.state = Arc::clone(&next);
        self.sender.send_replace(next);
        true
    }

    /// Receiver that observes every new snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<R::State>> {
        self.sender.subscribe()
    }
}
