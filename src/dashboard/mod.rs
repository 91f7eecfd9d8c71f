//! The `dashboard` state slice: title, slices, layout and filters.

mod filters;
mod reducer;
mod state;

pub use filters::{
    is_filterable_column, merge_filter_value, remove_filter_values, FilterValue, Filters,
    SliceFilter, TIME_FILTER_COLUMNS,
};
pub use reducer::DashboardReducer;
pub use state::{
    Dashboard, DashboardMetadata, DashboardState, LayoutItem, Position, Slice, SliceId,
};
