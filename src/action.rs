//! Actions understood by the dashboard store.
//!
//! Actions arrive as JSON objects tagged by `type`. Any `type` this crate
//! does not know deserializes to [`Action::Unknown`], which every reducer
//! treats as the identity transition.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::controls::FormData;
use crate::dashboard::{FilterValue, LayoutItem, SliceId};
use crate::mvi;

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    // -- dashboard ---------------------------------------------------------
    UpdateDashboardTitle {
        title: String,
    },
    UpdateDashboardLayout {
        layout: Vec<LayoutItem>,
    },
    RemoveSlice {
        slice_id: SliceId,
    },
    ToggleFaveStar {
        is_starred: bool,
    },
    SetEditMode {
        edit_mode: bool,
    },
    ToggleExpandSlice {
        slice_id: SliceId,
        is_expanded: bool,
    },
    AddFilter {
        slice_id: SliceId,
        col: String,
        vals: FilterValue,
        /// When false, the new value replaces the existing one.
        #[serde(default = "enabled")]
        merge: bool,
        #[serde(default = "enabled")]
        refresh: bool,
    },
    ClearFilter {
        slice_id: SliceId,
    },
    RemoveFilter {
        slice_id: SliceId,
        col: String,
        vals: Vec<Value>,
        #[serde(default = "enabled")]
        refresh: bool,
    },
    UpdateSliceName {
        slice_id: SliceId,
        slice_name: String,
    },

    // -- charts ------------------------------------------------------------
    ChartUpdateStarted {
        key: String,
        #[serde(default)]
        query_request_id: Option<String>,
        #[serde(default)]
        latest_query_form_data: FormData,
        /// Milliseconds since the Unix epoch.
        #[serde(default)]
        at: Option<u64>,
    },
    ChartUpdateSucceeded {
        key: String,
        query_response: Value,
        #[serde(default)]
        at: Option<u64>,
    },
    ChartUpdateStopped {
        key: String,
        #[serde(default)]
        at: Option<u64>,
    },
    ChartUpdateTimeout {
        key: String,
        timeout_secs: u64,
        #[serde(default)]
        at: Option<u64>,
    },
    ChartUpdateFailed {
        key: String,
        #[serde(default)]
        query_response: Option<Value>,
        #[serde(default)]
        at: Option<u64>,
    },
    ChartRenderingFailed {
        key: String,
        error: String,
    },
    TriggerQuery {
        key: String,
        value: bool,
    },
    RenderTriggered {
        key: String,
        value: u64,
    },
    UpdateQueryFormData {
        key: String,
        form_data: FormData,
    },
    RemoveChart {
        key: String,
    },

    /// Any `type` not listed above.
    #[serde(other)]
    Unknown,
}

impl mvi::Action for Action {
    fn kind(&self) -> &'static str {
        match self {
            Action::UpdateDashboardTitle { .. } => "UPDATE_DASHBOARD_TITLE",
            Action::UpdateDashboardLayout { .. } => "UPDATE_DASHBOARD_LAYOUT",
            Action::RemoveSlice { .. } => "REMOVE_SLICE",
            Action::ToggleFaveStar { .. } => "TOGGLE_FAVE_STAR",
            Action::SetEditMode { .. } => "SET_EDIT_MODE",
            Action::ToggleExpandSlice { .. } => "TOGGLE_EXPAND_SLICE",
            Action::AddFilter { .. } => "ADD_FILTER",
            Action::ClearFilter { .. } => "CLEAR_FILTER",
            Action::RemoveFilter { .. } => "REMOVE_FILTER",
            Action::UpdateSliceName { .. } => "UPDATE_SLICE_NAME",
            Action::ChartUpdateStarted { .. } => "CHART_UPDATE_STARTED",
            Action::ChartUpdateSucceeded { .. } => "CHART_UPDATE_SUCCEEDED",
            Action::ChartUpdateStopped { .. } => "CHART_UPDATE_STOPPED",
            Action::ChartUpdateTimeout { .. } => "CHART_UPDATE_TIMEOUT",
            Action::ChartUpdateFailed { .. } => "CHART_UPDATE_FAILED",
            Action::ChartRenderingFailed { .. } => "CHART_RENDERING_FAILED",
            Action::TriggerQuery { .. } => "TRIGGER_QUERY",
            Action::RenderTriggered { .. } => "RENDER_TRIGGERED",
            Action::UpdateQueryFormData { .. } => "UPDATE_QUERY_FORM_DATA",
            Action::RemoveChart { .. } => "REMOVE_CHART",
            Action::Unknown => "UNKNOWN",
        }
    }
}
