mod common;

use dashstate::action::Action;
use dashstate::dashboard::{DashboardReducer, DashboardState, FilterValue, LayoutItem};
use dashstate::mvi::Reducer;
use serde_json::{json, Value};
use std::sync::Arc;

fn initial() -> Arc<DashboardState> {
    Arc::clone(&common::initial_state().dashboard)
}

fn list(values: &[&str]) -> FilterValue {
    FilterValue::List(values.iter().map(|v| json!(v)).collect())
}

fn add_filter(slice_id: i64, col: &str, vals: FilterValue, merge: bool) -> Action {
    Action::AddFilter {
        slice_id,
        col: col.to_string(),
        vals,
        merge,
        refresh: true,
    }
}

#[test]
fn unknown_action_returns_same_state() {
    let state = initial();
    let next = DashboardReducer::reduce(Arc::clone(&state), &Action::Unknown);
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn chart_actions_are_ignored() {
    let state = initial();
    let next = DashboardReducer::reduce(
        Arc::clone(&state),
        &Action::TriggerQuery {
            key: "slice_10".to_string(),
            value: false,
        },
    );
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn update_title_shares_untouched_branches() {
    let state = initial();
    let next = DashboardReducer::reduce(
        Arc::clone(&state),
        &Action::UpdateDashboardTitle {
            title: "Revenue".to_string(),
        },
    );
    assert_eq!(next.dashboard.dashboard_title, "Revenue");
    assert_eq!(state.dashboard.dashboard_title, "Sales");
    assert!(Arc::ptr_eq(&state.filters, &next.filters));
    assert!(Arc::ptr_eq(&state.dashboard.slices, &next.dashboard.slices));
}

#[test]
fn update_layout_replaces_layout() {
    let layout = vec![LayoutItem {
        i: "10".to_string(),
        x: 0,
        y: 0,
        w: 12,
        h: 2,
        min_w: 2,
    }];
    let next = DashboardReducer::reduce(
        initial(),
        &Action::UpdateDashboardLayout {
            layout: layout.clone(),
        },
    );
    assert_eq!(*next.dashboard.layout, layout);
}

#[test]
fn remove_slice_drops_slice_layout_and_filters() {
    let state = initial();
    let next = DashboardReducer::reduce(Arc::clone(&state), &Action::RemoveSlice { slice_id: 30 });

    assert!(next.dashboard.slice(30).is_none());
    assert!(next.dashboard.layout.iter().all(|item| item.i != "30"));
    assert!(!next.dashboard.positions.contains_key(&30));
    assert!(!next.filters.contains_key(&30));
    assert!(next.refresh, "removing a filtering slice should refresh");
    // previous snapshot untouched
    assert!(state.dashboard.slice(30).is_some());
}

#[test]
fn remove_slice_without_filters_does_not_refresh() {
    let next = DashboardReducer::reduce(initial(), &Action::RemoveSlice { slice_id: 10 });
    assert!(next.dashboard.slice(10).is_none());
    assert!(!next.refresh);
}

#[test]
fn remove_unknown_slice_is_identity() {
    let state = initial();
    let next = DashboardReducer::reduce(Arc::clone(&state), &Action::RemoveSlice { slice_id: 999 });
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn toggles_star_and_edit_mode() {
    let next = DashboardReducer::reduce(initial(), &Action::ToggleFaveStar { is_starred: true });
    assert!(next.is_starred);
    let next = DashboardReducer::reduce(next, &Action::SetEditMode { edit_mode: true });
    assert!(next.edit_mode);
    assert!(next.is_starred);
}

#[test]
fn expand_and_collapse_slice() {
    let expanded = DashboardReducer::reduce(
        initial(),
        &Action::ToggleExpandSlice {
            slice_id: 10,
            is_expanded: true,
        },
    );
    assert_eq!(expanded.dashboard.metadata.expanded_slices.get(&10), Some(&true));

    let collapsed = DashboardReducer::reduce(
        Arc::clone(&expanded),
        &Action::ToggleExpandSlice {
            slice_id: 10,
            is_expanded: false,
        },
    );
    assert!(collapsed.dashboard.metadata.expanded_slices.is_empty());
    assert!(expanded.dashboard.metadata.expanded_slices.contains_key(&10));
}

#[test]
fn add_filter_on_groupby_column_sets_value() {
    let next = DashboardReducer::reduce(initial(), &add_filter(10, "region", list(&["EU"]), true));
    assert_eq!(next.filters[&10].get("region"), Some(&list(&["EU"])));
    assert!(next.refresh);
}

#[test]
fn add_filter_merges_lists() {
    let state = DashboardReducer::reduce(initial(), &add_filter(10, "region", list(&["EU"]), true));
    let state = DashboardReducer::reduce(state, &add_filter(10, "region", list(&["US", "EU"]), true));
    assert_eq!(
        state.filters[&10].get("region"),
        Some(&list(&["EU", "US", "EU"]))
    );
}

#[test]
fn add_filter_without_merge_replaces() {
    let state = DashboardReducer::reduce(initial(), &add_filter(10, "region", list(&["EU"]), true));
    let state = DashboardReducer::reduce(state, &add_filter(10, "region", list(&["US"]), false));
    assert_eq!(state.filters[&10].get("region"), Some(&list(&["US"])));
}

#[test]
fn add_filter_keeps_other_columns_of_the_slice() {
    let state = DashboardReducer::reduce(initial(), &add_filter(10, "region", list(&["EU"]), true));
    let state = DashboardReducer::reduce(
        state,
        &add_filter(10, "__from", FilterValue::Scalar(json!("2020-01-01")), true),
    );
    let slice_filter = &state.filters[&10];
    assert_eq!(slice_filter.get("region"), Some(&list(&["EU"])));
    assert_eq!(
        slice_filter.get("__from"),
        Some(&FilterValue::Scalar(json!("2020-01-01")))
    );
}

#[test]
fn add_filter_on_scalar_time_column_keeps_scalar() {
    let state = DashboardReducer::reduce(
        initial(),
        &add_filter(10, "__from", FilterValue::Scalar(json!("2020-01-01")), true),
    );
    let state = DashboardReducer::reduce(
        state,
        &add_filter(10, "__from", FilterValue::Scalar(json!("2021-06-01")), true),
    );
    assert_eq!(
        state.filters[&10].get("__from"),
        Some(&FilterValue::Scalar(json!("2020-01-01")))
    );
}

#[test]
fn add_filter_on_unrelated_column_is_identity() {
    let state = initial();
    let next = DashboardReducer::reduce(Arc::clone(&state), &add_filter(10, "country", list(&["FR"]), true));
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn add_filter_on_unknown_slice_is_identity() {
    let state = initial();
    let next = DashboardReducer::reduce(Arc::clone(&state), &add_filter(404, "__from", list(&["x"]), true));
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn add_filter_shares_other_slices_filters() {
    let state = initial();
    let next = DashboardReducer::reduce(Arc::clone(&state), &add_filter(10, "region", list(&["EU"]), true));
    assert!(Arc::ptr_eq(&state.filters[&30], &next.filters[&30]));
}

#[test]
fn clear_filter_removes_slice_entry() {
    let next = DashboardReducer::reduce(initial(), &Action::ClearFilter { slice_id: 30 });
    assert!(!next.filters.contains_key(&30));
    assert!(next.refresh);
}

#[test]
fn remove_filter_drops_listed_values() {
    let state = DashboardReducer::reduce(
        initial(),
        &add_filter(10, "region", list(&["EU", "US", "APAC"]), true),
    );
    let next = DashboardReducer::reduce(
        state,
        &Action::RemoveFilter {
            slice_id: 10,
            col: "region".to_string(),
            vals: vec![json!("US")],
            refresh: false,
        },
    );
    assert_eq!(next.filters[&10].get("region"), Some(&list(&["EU", "APAC"])));
    assert!(!next.refresh);
}

#[test]
fn remove_filter_on_missing_column_is_identity() {
    let state = initial();
    let next = DashboardReducer::reduce(
        Arc::clone(&state),
        &Action::RemoveFilter {
            slice_id: 30,
            col: "region".to_string(),
            vals: vec![Value::from("EU")],
            refresh: true,
        },
    );
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn update_slice_name_touches_only_that_slice() {
    let state = initial();
    let next = DashboardReducer::reduce(
        Arc::clone(&state),
        &Action::UpdateSliceName {
            slice_id: 20,
            slice_name: "Orders by region".to_string(),
        },
    );
    assert_eq!(next.dashboard.slice(20).unwrap().slice_name, "Orders by region");
    assert!(Arc::ptr_eq(
        state.dashboard.slice(10).unwrap(),
        next.dashboard.slice(10).unwrap()
    ));
}

#[test]
fn update_unknown_slice_name_is_identity() {
    let state = initial();
    let next = DashboardReducer::reduce(
        Arc::clone(&state),
        &Action::UpdateSliceName {
            slice_id: 1234,
            slice_name: "x".to_string(),
        },
    );
    assert!(Arc::ptr_eq(&state, &next));
}
