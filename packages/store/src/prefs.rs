//! # Per-device chart filter persistence
//!
//! The selected date range is stored as a relative day count (`0` = all
//! time) under a single well-known key, and re-derived against "now" on
//! load. Storage problems are never fatal: a missing, corrupt, or
//! unavailable store simply yields the all-time range.

use serde::{Deserialize, Serialize};

use crate::date_range::{days_to_range, range_to_days, DateRange};

/// Device-local key the chart filter is stored under.
pub const CHART_FILTER_KEY: &str = "weight-chart-filter";

#[derive(Debug, Serialize, Deserialize)]
struct StoredFilter {
    /// 0 means all time.
    days: i64,
}

/// Key/value preference storage. [`crate::MemoryStore`] on native builds and
/// in tests, [`crate::LocalStore`] (browser localStorage) on the web.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Load the persisted chart range, re-derived against the current instant.
pub fn load_saved_range(store: &impl PreferenceStore) -> DateRange {
    let saved = store
        .get(CHART_FILTER_KEY)
        .and_then(|raw| serde_json::from_str::<StoredFilter>(&raw).ok());
    match saved {
        Some(filter) => days_to_range(filter.days),
        None => DateRange::all_time(),
    }
}

/// Persist a chart range as its relative day count.
pub fn save_range(store: &impl PreferenceStore, range: &DateRange) {
    let filter = StoredFilter {
        days: range_to_days(range),
    };
    if let Ok(raw) = serde_json::to_string(&filter) {
        store.set(CHART_FILTER_KEY, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::days_to_range;
    use crate::memory::MemoryStore;

    #[test]
    fn saved_range_round_trips_as_a_day_count() {
        let store = MemoryStore::new();
        save_range(&store, &days_to_range(30));

        let loaded = load_saved_range(&store);
        assert_eq!(range_to_days(&loaded), 30);
        assert!(!loaded.is_all_time());
    }

    #[test]
    fn missing_preference_defaults_to_all_time() {
        let store = MemoryStore::new();
        assert!(load_saved_range(&store).is_all_time());
    }

    #[test]
    fn corrupt_preference_defaults_to_all_time() {
        let store = MemoryStore::new();
        store.set(CHART_FILTER_KEY, "not json");
        assert!(load_saved_range(&store).is_all_time());

        store.set(CHART_FILTER_KEY, r#"{"weeks": 3}"#);
        assert!(load_saved_range(&store).is_all_time());
    }

    #[test]
    fn all_time_survives_a_save_and_load() {
        let store = MemoryStore::new();
        save_range(&store, &DateRange::all_time());
        assert!(load_saved_range(&store).is_all_time());
    }
}
