//! Reducer for the dashboard slice.
//!
//! Every handler rebuilds only the path it touches and shares everything
//! else with the previous state.

use std::sync::Arc;

use serde_json::Value;

use super::filters::{
    is_filterable_column, merge_filter_value, remove_filter_values, FilterValue, SliceFilter,
};
use super::state::{Dashboard, DashboardMetadata, DashboardState, LayoutItem, Slice, SliceId};
use crate::action::Action;
use crate::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Action = Action;

    fn reduce(state: Arc<Self::State>, action: &Self::Action) -> Arc<Self::State> {
        match action {
            Action::UpdateDashboardTitle { title } => with_dashboard(&state, |d| Dashboard {
                dashboard_title: title.clone(),
                ..d.clone()
            }),
            Action::UpdateDashboardLayout { layout } => with_dashboard(&state, |d| Dashboard {
                layout: Arc::new(layout.clone()),
                ..d.clone()
            }),
            Action::RemoveSlice { slice_id } => remove_slice(state, *slice_id),
            Action::ToggleFaveStar { is_starred } => Arc::new(DashboardState {
                is_starred: *is_starred,
                ..(*state).clone()
            }),
            Action::SetEditMode { edit_mode } => Arc::new(DashboardState {
                edit_mode: *edit_mode,
                ..(*state).clone()
            }),
            Action::ToggleExpandSlice {
                slice_id,
                is_expanded,
            } => with_dashboard(&state, |d| {
                let mut expanded = d.metadata.expanded_slices.clone();
                if *is_expanded {
                    expanded.insert(*slice_id, true);
                } else {
                    expanded.remove(slice_id);
                }
                Dashboard {
                    metadata: Arc::new(DashboardMetadata {
                        expanded_slices: expanded,
                        ..(*d.metadata).clone()
                    }),
                    ..d.clone()
                }
            }),
            Action::AddFilter {
                slice_id,
                col,
                vals,
                merge,
                refresh,
            } => add_filter(state, *slice_id, col, vals, *merge, *refresh),
            Action::ClearFilter { slice_id } => {
                let mut filters = (*state.filters).clone();
                filters.remove(slice_id);
                Arc::new(DashboardState {
                    filters: Arc::new(filters),
                    refresh: true,
                    ..(*state).clone()
                })
            }
            Action::RemoveFilter {
                slice_id,
                col,
                vals,
                refresh,
            } => remove_filter(state, *slice_id, col, vals, *refresh),
            Action::UpdateSliceName {
                slice_id,
                slice_name,
            } => {
                if state.dashboard.slice(*slice_id).is_none() {
                    return state;
                }
                with_dashboard(&state, |d| {
                    let slices = d
                        .slices
                        .iter()
                        .map(|slice| {
                            if slice.slice_id == *slice_id {
                                Arc::new(Slice {
                                    slice_name: slice_name.clone(),
                                    ..(**slice).clone()
                                })
                            } else {
                                Arc::clone(slice)
                            }
                        })
                        .collect();
                    Dashboard {
                        slices: Arc::new(slices),
                        ..d.clone()
                    }
                })
            }

            Action::ChartUpdateStarted { .. }
            | Action::ChartUpdateSucceeded { .. }
            | Action::ChartUpdateStopped { .. }
            | Action::ChartUpdateTimeout { .. }
            | Action::ChartUpdateFailed { .. }
            | Action::ChartRenderingFailed { .. }
            | Action::TriggerQuery { .. }
            | Action::RenderTriggered { .. }
            | Action::UpdateQueryFormData { .. }
            | Action::RemoveChart { .. }
            | Action::Unknown => state,
        }
    }
}

fn with_dashboard(
    state: &DashboardState,
    update: impl FnOnce(&Dashboard) -> Dashboard,
) -> Arc<DashboardState> {
    Arc::new(DashboardState {
        dashboard: Arc::new(update(&state.dashboard)),
        ..state.clone()
    })
}

fn remove_slice(state: Arc<DashboardState>, slice_id: SliceId) -> Arc<DashboardState> {
    if state.dashboard.slice(slice_id).is_none() {
        tracing::debug!(slice_id, "REMOVE_SLICE for unknown slice");
        return state;
    }

    let key = slice_id.to_string();
    let dashboard = &state.dashboard;
    let slices = dashboard
        .slices
        .iter()
        .filter(|s| s.slice_id != slice_id)
        .cloned()
        .collect();
    let layout: Vec<LayoutItem> = dashboard
        .layout
        .iter()
        .filter(|item| item.i != key)
        .cloned()
        .collect();
    let mut positions = (*dashboard.positions).clone();
    positions.remove(&slice_id);

    // Dropping a slice that was filtering forces a re-query.
    let (filters, refresh) = if state.filters.contains_key(&slice_id) {
        let mut filters = (*state.filters).clone();
        filters.remove(&slice_id);
        (Arc::new(filters), true)
    } else {
        (Arc::clone(&state.filters), false)
    };

    Arc::new(DashboardState {
        dashboard: Arc::new(Dashboard {
            slices: Arc::new(slices),
            layout: Arc::new(layout),
            positions: Arc::new(positions),
            ..(**dashboard).clone()
        }),
        filters,
        refresh,
        ..(*state).clone()
    })
}

fn add_filter(
    state: Arc<DashboardState>,
    slice_id: SliceId,
    col: &str,
    vals: &FilterValue,
    merge: bool,
    refresh: bool,
) -> Arc<DashboardState> {
    let Some(slice) = state.dashboard.slice(slice_id) else {
        tracing::debug!(slice_id, "ADD_FILTER for unknown slice");
        return state;
    };
    if !is_filterable_column(col, slice.groupby()) {
        tracing::debug!(slice_id, col, "ADD_FILTER on column the slice does not group by");
        return state;
    }

    let mut slice_filter: SliceFilter = state
        .filters
        .get(&slice_id)
        .map(|f| (**f).clone())
        .unwrap_or_default();
    let merged = merge_filter_value(slice_filter.get(col), vals.clone(), merge);
    slice_filter.insert(col.to_string(), merged);

    let mut filters = (*state.filters).clone();
    filters.insert(slice_id, Arc::new(slice_filter));

    Arc::new(DashboardState {
        filters: Arc::new(filters),
        refresh,
        ..(*state).clone()
    })
}

fn remove_filter(
    state: Arc<DashboardState>,
    slice_id: SliceId,
    col: &str,
    vals: &[Value],
    refresh: bool,
) -> Arc<DashboardState> {
    let Some(current) = state.filters.get(&slice_id).and_then(|f| f.get(col)) else {
        return state;
    };

    let mut slice_filter = (*state.filters[&slice_id]).clone();
    match remove_filter_values(current, vals) {
        Some(remaining) => {
            slice_filter.insert(col.to_string(), remaining);
        }
        None => {
            slice_filter.remove(col);
        }
    }

    let mut filters = (*state.filters).clone();
    filters.insert(slice_id, Arc::new(slice_filter));

    Arc::new(DashboardState {
        filters: Arc::new(filters),
        refresh,
        ..(*state).clone()
    })
}
