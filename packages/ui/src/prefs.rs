//! Shared preference-store constructor for all platforms.
//!
//! Returns the appropriate [`store::PreferenceStore`]:
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::LocalStore`]
//! - **Native** (server-side rendering, tests): process-local [`store::MemoryStore`]

/// Create a platform-appropriate preference store.
pub fn make_preference_store() -> impl store::PreferenceStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
