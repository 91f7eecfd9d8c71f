use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dashboard::{Filters, SliceFilter, SliceId};

/// Parse the starting filters.
///
/// Tries the request preset first, then the dashboard's stored default.
/// Blank or unparsable candidates are skipped; with nothing usable the
/// result is empty. Never fails.
pub fn initial_filters(preselect: Option<&str>, default_filters: Option<&str>) -> Filters {
    [("preselect_filters", preselect), ("default_filters", default_filters)]
        .into_iter()
        .filter_map(|(source, raw)| raw.filter(|r| !r.trim().is_empty()).map(|r| (source, r)))
        .find_map(|(source, raw)| {
            match serde_json::from_str::<BTreeMap<SliceId, SliceFilter>>(raw) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    tracing::debug!(source, error = %err, "Ignoring unparsable filters");
                    None
                }
            }
        })
        .map(|parsed| parsed.into_iter().map(|(id, f)| (id, Arc::new(f))).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::FilterValue;
    use serde_json::json;

    #[test]
    fn preset_wins_over_default() {
        let filters = initial_filters(
            Some(r#"{"1": {"region": ["EU"]}}"#),
            Some(r#"{"2": {"region": ["US"]}}"#),
        );
        assert!(filters.contains_key(&1));
        assert!(!filters.contains_key(&2));
    }

    #[test]
    fn bad_preset_falls_back_to_default() {
        let filters = initial_filters(Some("{not json"), Some(r#"{"2": {"region": ["US"]}}"#));
        assert_eq!(
            filters[&2].get("region"),
            Some(&FilterValue::List(vec![json!("US")]))
        );
    }

    #[test]
    fn nothing_usable_is_empty() {
        assert!(initial_filters(Some("oops"), Some("[1, 2")).is_empty());
        assert!(initial_filters(None, None).is_empty());
        assert!(initial_filters(Some("  "), None).is_empty());
    }
}
