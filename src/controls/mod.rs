//! Visualization controls and the default-filling transform for form data.

mod defaults;
mod panels;

pub use defaults::{apply_default_form_data, ControlDefaults, FormData};
pub use panels::{builtin_control_panels, ControlPanel, ControlPanelRegistry};
