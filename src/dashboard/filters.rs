//! Filter values and the rules for merging them.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::state::SliceId;

/// Columns that any slice may filter on regardless of its group-by.
pub const TIME_FILTER_COLUMNS: [&str; 6] = [
    "__from",
    "__to",
    "__time_col",
    "__time_grain",
    "__time_origin",
    "__granularity",
];

/// A filter value as sent by filter widgets: a list of values or one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    List(Vec<Value>),
    Scalar(Value),
}

impl FilterValue {
    pub fn into_values(self) -> Vec<Value> {
        match self {
            FilterValue::List(values) => values,
            FilterValue::Scalar(value) => vec![value],
        }
    }
}

/// Column name to filter value, for one slice.
pub type SliceFilter = BTreeMap<String, FilterValue>;

/// Active filters keyed by the slice that emitted them.
pub type Filters = BTreeMap<SliceId, Arc<SliceFilter>>;

/// True if `col` is a time column or one of the slice's group-by columns.
pub fn is_filterable_column<'a>(col: &str, groupby: impl IntoIterator<Item = &'a str>) -> bool {
    TIME_FILTER_COLUMNS.contains(&col) || groupby.into_iter().any(|g| g == col)
}

/// Combine an incoming filter value with the current one for the same column.
///
/// - nothing there yet, or `merge` is false: the incoming value wins
/// - current value is a list: incoming values are appended (no dedup)
/// - current value is a scalar: the scalar is boxed ahead of the incoming
///   values and the head of that list is kept, or `""` when the head is
///   empty/falsy
pub fn merge_filter_value(
    existing: Option<&FilterValue>,
    incoming: FilterValue,
    merge: bool,
) -> FilterValue {
    match existing {
        None => incoming,
        Some(_) if !merge => incoming,
        Some(FilterValue::List(current)) => {
            let mut merged = current.clone();
            merged.extend(incoming.into_values());
            FilterValue::List(merged)
        }
        Some(FilterValue::Scalar(current)) => {
            let head = std::iter::once(current.clone())
                .chain(incoming.into_values())
                .next()
                .filter(is_truthy);
            FilterValue::Scalar(head.unwrap_or_else(|| Value::String(String::new())))
        }
    }
}

/// Drop `excluded` values from a filter value.
///
/// Returns `None` when a scalar value was excluded, meaning the column
/// should be removed altogether.
pub fn remove_filter_values(current: &FilterValue, excluded: &[Value]) -> Option<FilterValue> {
    match current {
        FilterValue::List(values) => Some(FilterValue::List(
            values
                .iter()
                .filter(|v| !excluded.contains(v))
                .cloned()
                .collect(),
        )),
        FilterValue::Scalar(value) if excluded.contains(value) => None,
        FilterValue::Scalar(_) => Some(current.clone()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
