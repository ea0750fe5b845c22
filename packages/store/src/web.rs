//! # Web Storage backend: browser-side persistence
//!
//! [`WebStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes the browser's `localStorage` (or
//! `sessionStorage`) through `web-sys`, so records survive page reloads and
//! are cleared only when the user clears site data or a private window closes.
//!
//! ## Connection management
//!
//! `WebStorage` keeps no handle. Every call looks the `Storage` object up again
//! from `window`; the browser caches it.
//!
//! ## Error handling
//!
//! A missing `window`, disabled storage, or a `QuotaExceededError` from
//! `setItem` becomes [`StoreError::Unavailable`]. [`crate::RecordStore`]
//! degrades on those rather than surfacing them to the UI.

use wasm_bindgen::JsValue;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Area {
    Local,
    Session,
}

/// Browser Web Storage-backed KeyValueStore.
#[derive(Clone, Debug)]
pub struct WebStorage {
    area: Area,
}

impl WebStorage {
    /// Persist in `window.localStorage`.
    pub fn local() -> Self {
        Self { area: Area::Local }
    }

    /// Persist in `window.sessionStorage` (cleared when the tab closes).
    pub fn session() -> Self {
        Self {
            area: Area::Session,
        }
    }

    fn storage(&self) -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no global window".to_string()))?;
        let storage = match self.area {
            Area::Local => window.local_storage(),
            Area::Session => window.session_storage(),
        };
        storage
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("web storage disabled".to_string()))
    }
}

impl Default for WebStorage {
    fn default() -> Self {
        Self::local()
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Unavailable(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl KeyValueStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
