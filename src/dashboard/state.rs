use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::filters::Filters;
use crate::controls::FormData;
use crate::mvi::SliceState;

pub type SliceId = i64;

/// Grid item consumed by the layout engine. `i` is the slice id as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(default)]
    pub min_w: u32,
}

/// Stored position of a slice. `col` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub slice_id: SliceId,
    pub col: u32,
    pub row: u32,
    pub size_x: u32,
    pub size_y: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub slice_id: SliceId,
    pub slice_name: String,
    pub slice_url: String,
    /// Form data exactly as stored.
    pub form_data: Arc<FormData>,
    /// Form data with control defaults filled in.
    pub effective_form_data: Arc<FormData>,
}

impl Slice {
    /// Group-by columns from the effective form data.
    pub fn groupby(&self) -> impl Iterator<Item = &str> {
        self.effective_form_data
            .get("groupby")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardMetadata {
    /// JSON-encoded filters applied when no preset is requested.
    #[serde(default)]
    pub default_filters: Option<String>,
    #[serde(default)]
    pub expanded_slices: BTreeMap<SliceId, bool>,
    #[serde(default)]
    pub timed_refresh_immune_slices: Vec<SliceId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub id: i64,
    pub dashboard_title: String,
    pub slug: Option<String>,
    pub metadata: Arc<DashboardMetadata>,
    pub slices: Arc<Vec<Arc<Slice>>>,
    pub layout: Arc<Vec<LayoutItem>>,
    pub positions: Arc<BTreeMap<SliceId, Position>>,
}

impl Dashboard {
    pub fn slice(&self, slice_id: SliceId) -> Option<&Arc<Slice>> {
        self.slices.iter().find(|s| s.slice_id == slice_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub dashboard: Arc<Dashboard>,
    pub filters: Arc<Filters>,
    /// Set when a filter change should re-query affected charts.
    pub refresh: bool,
    pub is_starred: bool,
    pub edit_mode: bool,
    pub user_id: Option<Value>,
    pub datasources: Arc<Map<String, Value>>,
    /// Environment metadata, stripped of locale fields.
    pub common: Arc<Map<String, Value>>,
}

impl SliceState for DashboardState {}
