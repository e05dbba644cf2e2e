//! Browser `localStorage` as a `PreferenceStore`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes csr-only storage access so the theme controller never touches
//! web-sys. Storage can be missing (privacy modes, sandboxed iframes); reads
//! then return `None` and writes are dropped.

use crate::state::theme::PreferenceStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::debug!("localStorage unavailable; {key} not persisted");
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
