//! Preference storage behind a small key/value interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome persists display preferences (currently the RTL flag)
//! through [`PreferenceStore`] instead of touching `localStorage` directly,
//! so SSR and tests can run against [`MemoryStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// String key/value preference storage.
pub trait PreferenceStore: Send + Sync {
    /// Read the stored value for `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`. Failures are swallowed; preferences are best-effort.
    fn set(&self, key: &str, value: &str);
}

/// Shared handle provided through Leptos context.
pub type SharedPreferenceStore = Arc<dyn PreferenceStore>;

/// Browser `localStorage`. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("preference write failed: {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-process store for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }
}

/// The store the app uses by default: `localStorage` in the browser,
/// memory everywhere else.
pub fn default_store() -> SharedPreferenceStore {
    if cfg!(feature = "hydrate") {
        Arc::new(BrowserStore)
    } else {
        Arc::new(MemoryStore::default())
    }
}
