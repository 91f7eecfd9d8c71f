//! The `charts` state slice: one tracking record per chart.

mod reducer;
mod state;

pub use reducer::ChartsReducer;
pub use state::{Chart, ChartStatus, ChartsState};
