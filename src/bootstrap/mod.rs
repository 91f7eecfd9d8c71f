//! Turning the bootstrap payload into the initial root state.

mod filters;
mod initializer;
mod layout;
mod payload;

pub use filters::initial_filters;
pub use initializer::Initializer;
pub use layout::{compute_layout, default_position};
pub use payload::{BootstrapPayload, DashboardData, RawSlice, RequestParams};
