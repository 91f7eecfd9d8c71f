use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
    /// Overrides for control defaults used when filling form data.
    /// Keys name controls; values replace or extend the built-in defaults.
    #[serde(default)]
    pub form_data: BTreeMap<String, Value>,
}

/// Largest grid dimension accepted in a config file.
pub const MAX_GRID_UNITS: u32 = 1024;

/// Grid used to place slices that carry no explicit position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of grid columns (default: 12).
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Width of a default-placed slice in grid units (default: 4).
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height of a default-placed slice in grid units (default: 4).
    #[serde(default = "default_height")]
    pub height: u32,
    /// Slices per row before wrapping (default: 3).
    #[serde(default = "default_per_row")]
    pub per_row: u32,
    /// Minimum width a layout item may be resized to (default: 2).
    #[serde(default = "default_min_width")]
    pub min_width: u32,
}

/// Naming of the per-slice chart records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Chart key prefix (default: "slice").
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Separator between prefix and slice id (default: "_").
    #[serde(default = "default_key_separator")]
    pub key_separator: String,
}

fn default_columns() -> u32 {
    12
}

fn default_width() -> u32 {
    4
}

fn default_height() -> u32 {
    4
}

fn default_per_row() -> u32 {
    3
}

fn default_min_width() -> u32 {
    2
}

fn default_key_prefix() -> String {
    "slice".to_string()
}

fn default_key_separator() -> String {
    "_".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            width: default_width(),
            height: default_height(),
            per_row: default_per_row(),
            min_width: default_min_width(),
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            key_separator: default_key_separator(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            charts: ChartsConfig::default(),
            form_data: BTreeMap::new(),
        }
    }
}

impl LayoutConfig {
    /// Copy with every zero dimension replaced by its default and every
    /// dimension capped at [`MAX_GRID_UNITS`].
    pub fn sanitized(&self) -> Self {
        let fix = |value: u32, default: u32| match value {
            0 => default,
            v => v.min(MAX_GRID_UNITS),
        };
        Self {
            columns: fix(self.columns, default_columns()),
            width: fix(self.width, default_width()),
            height: fix(self.height, default_height()),
            per_row: fix(self.per_row, default_per_row()),
            min_width: self.min_width.min(MAX_GRID_UNITS),
        }
    }
}

impl ChartsConfig {
    /// Chart key for a slice, e.g. `slice_12`.
    pub fn chart_key(&self, slice_id: i64) -> String {
        format!("{}{}{}", self.key_prefix, self.key_separator, slice_id)
    }
}
