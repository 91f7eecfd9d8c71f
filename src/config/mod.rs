mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ChartsConfig, Config, LayoutConfig, MAX_GRID_UNITS};
