//! Builds the initial root state from a bootstrap payload.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::filters::initial_filters;
use super::layout::compute_layout;
use super::payload::{BootstrapPayload, RequestParams};
use crate::charts::{Chart, ChartsState};
use crate::config::Config;
use crate::controls::{apply_default_form_data, ControlDefaults, ControlPanelRegistry};
use crate::dashboard::{Dashboard, DashboardState, Slice};
use crate::root::{RootState, Session};

/// Environment keys that are not kept in session state.
const STRIPPED_COMMON_KEYS: [&str; 2] = ["locale", "language_pack"];

/// One-shot transform from bootstrap payload to [`RootState`].
///
/// Holds the configuration and control panels it needs; nothing else is
/// consulted, so the same inputs always give the same state (apart from
/// the session's impression id).
#[derive(Debug)]
pub struct Initializer {
    config: Config,
    panels: Arc<ControlPanelRegistry>,
    control_defaults: ControlDefaults,
}

impl Initializer {
    /// Out-of-range layout dimensions are replaced, see [`LayoutConfig::sanitized`].
    ///
    /// [`LayoutConfig::sanitized`]: crate::config::LayoutConfig::sanitized
    pub fn new(mut config: Config, panels: Arc<ControlPanelRegistry>) -> Self {
        let layout = config.layout.sanitized();
        if layout != config.layout {
            tracing::warn!(
                configured = ?config.layout,
                using = ?layout,
                "Layout dimensions out of range, using adjusted grid"
            );
            config.layout = layout;
        }
        let control_defaults = ControlDefaults::with_overrides(&config.form_data);
        Self {
            config,
            panels,
            control_defaults,
        }
    }

    /// Initial state with a freshly generated session.
    pub fn initial_state(&self, payload: BootstrapPayload, request: &RequestParams) -> RootState {
        self.initial_state_with_session(payload, request, Session::new())
    }

    pub fn initial_state_with_session(
        &self,
        payload: BootstrapPayload,
        request: &RequestParams,
        session: Session,
    ) -> RootState {
        let BootstrapPayload {
            user_id,
            datasources,
            mut common,
            dashboard_data: data,
        } = payload;

        for key in STRIPPED_COMMON_KEYS {
            common.remove(key);
        }

        let filters = initial_filters(
            request.preselect_filters.as_deref(),
            data.metadata.default_filters.as_deref(),
        );

        let stored_positions = data.position_json.as_deref().unwrap_or_default();
        let (layout, positions) =
            compute_layout(&data.slices, stored_positions, &self.config.layout);

        let mut charts = BTreeMap::new();
        let mut slices = Vec::with_capacity(data.slices.len());
        for raw in data.slices {
            let form_data = Arc::new(raw.form_data);
            let effective = Arc::new(apply_default_form_data(
                &form_data,
                &self.panels,
                &self.control_defaults,
            ));

            let chart_key = self.config.charts.chart_key(raw.slice_id);
            let chart = Chart::new(
                chart_key.clone(),
                raw.slice_id,
                Arc::clone(&form_data),
                Arc::clone(&effective),
            );
            charts.insert(chart_key, Arc::new(chart));

            slices.push(Arc::new(Slice {
                slice_id: raw.slice_id,
                slice_name: raw.slice_name,
                slice_url: raw.slice_url,
                form_data,
                effective_form_data: effective,
            }));
        }

        tracing::info!(
            dashboard_id = data.id,
            slices = slices.len(),
            filtered_slices = filters.len(),
            "Built initial dashboard state"
        );

        let dashboard = Dashboard {
            id: data.id,
            dashboard_title: data.dashboard_title,
            slug: data.slug,
            metadata: Arc::new(data.metadata),
            slices: Arc::new(slices),
            layout: Arc::new(layout),
            positions: Arc::new(positions),
        };

        RootState {
            charts: Arc::new(ChartsState { charts }),
            dashboard: Arc::new(DashboardState {
                dashboard: Arc::new(dashboard),
                filters: Arc::new(filters),
                refresh: false,
                is_starred: false,
                edit_mode: false,
                user_id,
                datasources: Arc::new(datasources),
                common: Arc::new(common),
            }),
            session: Arc::new(session),
        }
    }
}
