//! # Key-value substrate
//!
//! [`KeyValueStore`] is the string-keyed, string-valued interface every record
//! collection is persisted through. It mirrors the browser `Storage` API
//! (`getItem` / `setItem` / `removeItem`) so the same [`crate::RecordStore`]
//! logic runs against `localStorage` on the web, a directory of JSON files on
//! desktop, or a plain map in tests.
//!
//! | Backend | Module | Platform |
//! |---------|--------|----------|
//! | [`crate::MemoryStore`] | `memory` | all |
//! | [`crate::FileStore`] | `file_store` | native |
//! | `WebStorage` | `web` | `wasm32` with the `web` feature |
//!
//! Methods take `&self`; backends needing mutation use interior mutability.
//! Calls are synchronous and complete before returning.

use crate::error::Result;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
