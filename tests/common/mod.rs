//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use dashstate::bootstrap::{BootstrapPayload, Initializer, RequestParams};
use dashstate::config::Config;
use dashstate::controls::builtin_control_panels;
use dashstate::root::RootState;
use serde_json::{json, Value};

/// Payload with three slices: 10 and 20 group by `region`, 30 is a filter box
/// grouping by `country`. Slice 20 has a stored position.
pub fn payload_json() -> Value {
    json!({
        "user_id": "7",
        "datasources": {"1__table": {"name": "sales"}},
        "common": {
            "locale": "en",
            "language_pack": {"domain": "superset"},
            "conf": {"SUPERSET_WEBSERVER_TIMEOUT": 60}
        },
        "dashboard_data": {
            "id": 1,
            "dashboard_title": "Sales",
            "slug": "sales",
            "metadata": {
                "default_filters": "{\"30\": {\"country\": [\"FR\"]}}",
                "expanded_slices": {}
            },
            "position_json": [
                {"slice_id": 20, "col": 7, "row": 10, "size_x": 6, "size_y": 8}
            ],
            "slices": [
                {
                    "slice_id": 10,
                    "slice_name": "Revenue",
                    "form_data": {"viz_type": "line", "groupby": ["region"]}
                },
                {
                    "slice_id": 20,
                    "slice_name": "Orders",
                    "form_data": {"viz_type": "table", "groupby": ["region"], "row_limit": 50}
                },
                {
                    "slice_id": 30,
                    "slice_name": "Filters",
                    "form_data": {"viz_type": "filter_box", "groupby": ["country"]}
                }
            ]
        }
    })
}

pub fn payload() -> BootstrapPayload {
    serde_json::from_value(payload_json()).expect("fixture payload parses")
}

pub fn initializer() -> Initializer {
    Initializer::new(Config::default(), Arc::new(builtin_control_panels()))
}

pub fn initial_state() -> RootState {
    initializer().initial_state(payload(), &RequestParams::default())
}
