use serde::Deserialize;
use serde_json::{Map, Value};

use crate::controls::FormData;
use crate::dashboard::{DashboardMetadata, Position, SliceId};

/// Initial data handed over by the embedding page.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapPayload {
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub datasources: Map<String, Value>,
    /// Environment metadata. `locale` and `language_pack` are dropped on load.
    #[serde(default)]
    pub common: Map<String, Value>,
    pub dashboard_data: DashboardData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardData {
    pub id: i64,
    #[serde(default)]
    pub dashboard_title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub metadata: DashboardMetadata,
    #[serde(default)]
    pub position_json: Option<Vec<Position>>,
    #[serde(default)]
    pub slices: Vec<RawSlice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSlice {
    pub slice_id: SliceId,
    #[serde(default)]
    pub slice_name: String,
    #[serde(default)]
    pub slice_url: String,
    #[serde(default)]
    pub form_data: FormData,
}

/// Request-level overrides, e.g. `?preselect_filters=...`.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    pub preselect_filters: Option<String>,
}

impl BootstrapPayload {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
