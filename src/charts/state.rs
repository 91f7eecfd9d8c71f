use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::controls::FormData;
use crate::dashboard::SliceId;
use crate::mvi::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStatus {
    #[default]
    Loading,
    Success,
    Stopped,
    Failed,
}

/// Query and render bookkeeping for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub chart_key: String,
    pub slice_id: SliceId,
    pub form_data: Arc<FormData>,
    pub effective_form_data: Arc<FormData>,
    pub chart_status: ChartStatus,
    pub chart_alert: Option<String>,
    pub chart_update_start_time: Option<u64>,
    pub chart_update_end_time: Option<u64>,
    pub latest_query_form_data: Arc<FormData>,
    pub query_request_id: Option<String>,
    pub query_response: Option<Arc<Value>>,
    pub trigger_query: bool,
    pub last_rendered: u64,
}

impl Chart {
    /// Fresh record for a chart that has not been queried yet.
    pub fn new(
        chart_key: impl Into<String>,
        slice_id: SliceId,
        form_data: Arc<FormData>,
        effective_form_data: Arc<FormData>,
    ) -> Self {
        Self {
            chart_key: chart_key.into(),
            slice_id,
            form_data,
            effective_form_data,
            chart_status: ChartStatus::Loading,
            chart_alert: None,
            chart_update_start_time: None,
            chart_update_end_time: None,
            latest_query_form_data: Arc::new(FormData::new()),
            query_request_id: None,
            query_response: None,
            trigger_query: true,
            last_rendered: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ChartsState {
    pub charts: BTreeMap<String, Arc<Chart>>,
}

impl ChartsState {
    pub fn get(&self, key: &str) -> Option<&Arc<Chart>> {
        self.charts.get(key)
    }
}

impl SliceState for ChartsState {}
