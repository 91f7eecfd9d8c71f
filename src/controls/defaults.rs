use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use super::panels::ControlPanelRegistry;

/// Raw or effective chart configuration, a JSON object keyed by control name.
pub type FormData = Map<String, Value>;

/// Default value for every known control.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlDefaults {
    defaults: BTreeMap<String, Value>,
}

impl Default for ControlDefaults {
    fn default() -> Self {
        let defaults = [
            ("viz_type", json!("table")),
            ("groupby", json!([])),
            ("metrics", json!([])),
            ("columns", json!([])),
            ("row_limit", json!(10000)),
            ("since", json!("7 days ago")),
            ("until", json!("now")),
            ("granularity_sqla", Value::Null),
            ("time_grain_sqla", Value::Null),
            ("order_desc", json!(true)),
            ("color_scheme", json!("bnbColors")),
            ("show_legend", json!(true)),
            ("y_axis_format", json!(".3s")),
            ("x_axis_format", json!("smart_date")),
            ("where", json!("")),
            ("having", json!("")),
            ("filters", json!([])),
            ("adhoc_filters", json!([])),
            ("instant_filtering", json!(true)),
            ("date_filter", json!(false)),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

        Self { defaults }
    }
}

impl ControlDefaults {
    /// Built-in defaults with `overrides` layered on top.
    pub fn with_overrides(overrides: &BTreeMap<String, Value>) -> Self {
        let mut defaults = Self::default();
        for (name, value) in overrides {
            defaults.defaults.insert(name.clone(), value.clone());
        }
        defaults
    }

    pub fn get(&self, control: &str) -> Option<&Value> {
        self.defaults.get(control)
    }

    pub fn control_names(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }
}

/// Produce the effective form data for a chart.
///
/// The control set comes from the panel registered for `raw.viz_type`,
/// then the registry's default panel, then every known control. Controls
/// absent from `raw` get their default; present values pass through as-is,
/// including explicit nulls. Keys in `raw` that no control claims are kept.
pub fn apply_default_form_data(
    raw: &FormData,
    panels: &ControlPanelRegistry,
    defaults: &ControlDefaults,
) -> FormData {
    let viz_type = raw.get("viz_type").and_then(Value::as_str);
    let panel = panels
        .get_or_default(viz_type)
        .or_else(|| panels.get_or_default(None));

    let control_names: Vec<&str> = match &panel {
        Some(panel) => panel.controls.iter().map(String::as_str).collect(),
        None => defaults.control_names().collect(),
    };

    let mut effective = FormData::new();
    for name in control_names {
        let value = match raw.get(name) {
            Some(value) => value.clone(),
            None => defaults.get(name).cloned().unwrap_or(Value::Null),
        };
        effective.insert(name.to_string(), value);
    }

    for (key, value) in raw {
        if !effective.contains_key(key) {
            effective.insert(key.clone(), value.clone());
        }
    }

    effective
}
