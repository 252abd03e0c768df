//! API key persistence backed by localStorage
//!
//! One slot, read on every request and whenever the settings modal opens.
//! No client-side validation of the key format.

use gloo::storage::{errors::StorageError, LocalStorage, Storage};

const STORAGE_KEY: &str = "fashionsense_api_key";

/// Stored key, or an empty string when unset.
pub fn get() -> String {
    LocalStorage::get(STORAGE_KEY).unwrap_or_default()
}

/// Persist the key. An empty input clears the slot instead.
pub fn set(key: &str) {
    if key.is_empty() {
        clear();
        return;
    }
    if let Err(err) = LocalStorage::set(STORAGE_KEY, key) {
        warn_storage_failure(&err);
    }
}

/// Remove the stored key.
pub fn clear() {
    LocalStorage::delete(STORAGE_KEY);
}

fn warn_storage_failure(err: &StorageError) {
    gloo::console::warn!(format!("could not persist API key: {err}"));
}
