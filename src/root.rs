//! Root state of a dashboard session and the store that owns it.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::action::Action;
use crate::charts::ChartsReducer;
use crate::combine_reducers;
use crate::dashboard::DashboardReducer;
use crate::mvi::{Reducer, SliceState, Store};

/// Per-session identifiers. Fixed at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub impression_id: Uuid,
}

impl Session {
    pub fn new() -> Self {
        Self {
            impression_id: Uuid::new_v4(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl SliceState for Session {}

/// No action changes the session.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = Session;
    type Action = Action;

    fn reduce(state: Arc<Self::State>, _action: &Self::Action) -> Arc<Self::State> {
        state
    }
}

combine_reducers! {
    /// Everything the rendering layer reads, one field per slice.
    #[derive(Serialize)]
    pub struct RootState => RootReducer: Action {
        charts: ChartsReducer,
        dashboard: DashboardReducer,
        session: SessionReducer,
    }
}

/// Store over the full dashboard state.
pub type DashboardStore = Store<RootReducer>;
