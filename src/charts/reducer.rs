//! Reducer for chart query/render lifecycle.
//!
//! Pure function: request timestamps arrive inside the action. An action
//! naming a chart key that is not tracked leaves the state untouched.

use std::sync::Arc;

use serde_json::Value;

use super::state::{Chart, ChartStatus, ChartsState};
use crate::action::Action;
use crate::mvi::Reducer;

const STOPPED_ALERT: &str = "Updating chart was stopped";
const NETWORK_ERROR_ALERT: &str = "Network error.";

pub struct ChartsReducer;

impl Reducer for ChartsReducer {
    type State = ChartsState;
    type Action = Action;

    fn reduce(state: Arc<Self::State>, action: &Self::Action) -> Arc<Self::State> {
        match action {
            Action::ChartUpdateStarted {
                key,
                query_request_id,
                latest_query_form_data,
                at,
            } => update_chart(state, key, |chart| Chart {
                chart_status: ChartStatus::Loading,
                chart_alert: None,
                chart_update_start_time: *at,
                chart_update_end_time: None,
                query_request_id: query_request_id.clone(),
                latest_query_form_data: Arc::new(latest_query_form_data.clone()),
                ..chart.clone()
            }),
            Action::ChartUpdateSucceeded {
                key,
                query_response,
                at,
            } => update_chart(state, key, |chart| Chart {
                chart_status: ChartStatus::Success,
                chart_alert: None,
                query_response: Some(Arc::new(query_response.clone())),
                chart_update_end_time: *at,
                ..chart.clone()
            }),
            Action::ChartUpdateStopped { key, at } => update_chart(state, key, |chart| Chart {
                chart_status: ChartStatus::Stopped,
                chart_alert: Some(STOPPED_ALERT.to_string()),
                chart_update_end_time: *at,
                ..chart.clone()
            }),
            Action::ChartUpdateTimeout {
                key,
                timeout_secs,
                at,
            } => update_chart(state, key, |chart| Chart {
                chart_status: ChartStatus::Failed,
                chart_alert: Some(timeout_alert(*timeout_secs)),
                chart_update_end_time: *at,
                ..chart.clone()
            }),
            Action::ChartUpdateFailed {
                key,
                query_response,
                at,
            } => update_chart(state, key, |chart| Chart {
                chart_status: ChartStatus::Failed,
                chart_alert: Some(failure_alert(query_response.as_ref())),
                query_response: query_response.clone().map(Arc::new),
                chart_update_end_time: *at,
                ..chart.clone()
            }),
            Action::ChartRenderingFailed { key, error } => update_chart(state, key, |chart| Chart {
                chart_status: ChartStatus::Failed,
                chart_alert: Some(format!(
                    "An error occurred while rendering the visualization: {}",
                    error
                )),
                ..chart.clone()
            }),
            Action::TriggerQuery { key, value } => update_chart(state, key, |chart| Chart {
                trigger_query: *value,
                ..chart.clone()
            }),
            Action::RenderTriggered { key, value } => update_chart(state, key, |chart| Chart {
                last_rendered: *value,
                ..chart.clone()
            }),
            Action::UpdateQueryFormData { key, form_data } => {
                update_chart(state, key, |chart| Chart {
                    latest_query_form_data: Arc::new(form_data.clone()),
                    ..chart.clone()
                })
            }
            Action::RemoveChart { key } => {
                if !state.charts.contains_key(key) {
                    return state;
                }
                let mut charts = state.charts.clone();
                charts.remove(key);
                Arc::new(ChartsState { charts })
            }

            Action::UpdateDashboardTitle { .. }
            | Action::UpdateDashboardLayout { .. }
            | Action::RemoveSlice { .. }
            | Action::ToggleFaveStar { .. }
            | Action::SetEditMode { .. }
            | Action::ToggleExpandSlice { .. }
            | Action::AddFilter { .. }
            | Action::ClearFilter { .. }
            | Action::RemoveFilter { .. }
            | Action::UpdateSliceName { .. }
            | Action::Unknown => state,
        }
    }
}

fn update_chart(
    state: Arc<ChartsState>,
    key: &str,
    update: impl FnOnce(&Chart) -> Chart,
) -> Arc<ChartsState> {
    let Some(chart) = state.charts.get(key) else {
        tracing::debug!(key, "Chart action for untracked chart");
        return state;
    };
    let updated = Arc::new(update(chart));
    let mut charts = state.charts.clone();
    charts.insert(key.to_string(), updated);
    Arc::new(ChartsState { charts })
}

fn timeout_alert(timeout_secs: u64) -> String {
    format!(
        "Query timeout - visualization queries are set to timeout at {} seconds. \
         Perhaps your data has grown, your database is under unusual load, \
         or you are simply querying a data source that is too large to be \
         processed within the timeout range. If that is the case, we recommend \
         that you summarize your data further.",
        timeout_secs
    )
}

fn failure_alert(query_response: Option<&Value>) -> String {
    query_response
        .and_then(|r| r.get("error"))
        .and_then(Value::as_str)
        .unwrap_or(NETWORK_ERROR_ALERT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::FormData;
    use serde_json::json;

    fn state_with(key: &str) -> Arc<ChartsState> {
        let chart = Chart::new(key, 1, Arc::new(FormData::new()), Arc::new(FormData::new()));
        let mut state = ChartsState::default();
        state.charts.insert(key.to_string(), Arc::new(chart));
        Arc::new(state)
    }

    #[test]
    fn failed_without_response_reports_network_error() {
        let state = ChartsReducer::reduce(
            state_with("slice_1"),
            &Action::ChartUpdateFailed {
                key: "slice_1".to_string(),
                query_response: None,
                at: Some(10),
            },
        );
        let chart = state.get("slice_1").unwrap();
        assert_eq!(chart.chart_status, ChartStatus::Failed);
        assert_eq!(chart.chart_alert.as_deref(), Some("Network error."));
        assert_eq!(chart.chart_update_end_time, Some(10));
    }

    #[test]
    fn failed_with_response_uses_its_error() {
        let state = ChartsReducer::reduce(
            state_with("slice_1"),
            &Action::ChartUpdateFailed {
                key: "slice_1".to_string(),
                query_response: Some(json!({"error": "column missing"})),
                at: None,
            },
        );
        let chart = state.get("slice_1").unwrap();
        assert_eq!(chart.chart_alert.as_deref(), Some("column missing"));
        assert!(chart.query_response.is_some());
    }

    #[test]
    fn timeout_mentions_limit() {
        let state = ChartsReducer::reduce(
            state_with("slice_1"),
            &Action::ChartUpdateTimeout {
                key: "slice_1".to_string(),
                timeout_secs: 45,
                at: None,
            },
        );
        let alert = state.get("slice_1").unwrap().chart_alert.clone().unwrap();
        assert!(alert.contains("45 seconds"));
    }

    #[test]
    fn untracked_key_is_identity() {
        let before = state_with("slice_1");
        let after = ChartsReducer::reduce(
            Arc::clone(&before),
            &Action::TriggerQuery {
                key: "slice_2".to_string(),
                value: false,
            },
        );
        assert!(Arc::ptr_eq(&before, &after));
    }
}
