use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::registry::RegistryWithDefaultKey;

/// Controls a visualization type exposes in its configuration panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlPanel {
    pub viz_type: String,
    pub controls: Vec<String>,
}

impl ControlPanel {
    pub fn new(viz_type: impl Into<String>, controls: &[&str]) -> Self {
        Self {
            viz_type: viz_type.into(),
            controls: controls.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Control panels keyed by visualization type.
pub type ControlPanelRegistry = RegistryWithDefaultKey<Arc<ControlPanel>>;

const QUERY_CONTROLS: &[&str] = &[
    "viz_type",
    "granularity_sqla",
    "time_grain_sqla",
    "since",
    "until",
    "where",
    "having",
    "adhoc_filters",
];

/// Registry pre-loaded with the stock visualization panels. `table` is the
/// default panel.
pub fn builtin_control_panels() -> ControlPanelRegistry {
    let registry = ControlPanelRegistry::new("ControlPanelRegistry").with_default_key("table");

    let panels: [(&str, &[&str]); 6] = [
        ("table", &["groupby", "metrics", "columns", "row_limit", "order_desc"]),
        (
            "line",
            &[
                "metrics",
                "groupby",
                "row_limit",
                "color_scheme",
                "show_legend",
                "x_axis_format",
                "y_axis_format",
            ],
        ),
        (
            "dist_bar",
            &[
                "metrics",
                "groupby",
                "columns",
                "row_limit",
                "color_scheme",
                "show_legend",
                "y_axis_format",
            ],
        ),
        ("pie", &["metrics", "groupby", "row_limit", "color_scheme", "show_legend"]),
        ("big_number", &["metrics", "y_axis_format"]),
        ("filter_box", &["groupby", "metrics", "date_filter", "instant_filtering"]),
    ];

    for (viz_type, specific) in panels {
        let controls: Vec<&str> = QUERY_CONTROLS.iter().chain(specific).copied().collect();
        registry.register(viz_type, Arc::new(ControlPanel::new(viz_type, &controls)));
    }

    registry
}
