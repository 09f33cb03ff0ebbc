//! # Browser localStorage preference store
//!
//! [`LocalStore`] is the [`PreferenceStore`] implementation used on the web
//! platform. Values land in `window.localStorage`, so the chart filter
//! survives reloads on the same device without touching the server.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! the default all-time range rather than breaking the dashboard.

use crate::prefs::PreferenceStore;

/// localStorage-backed PreferenceStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(storage)) = window.local_storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
}
