//! Key-value persistence behind the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists into `localStorage`; tests and the server
//! build use [`MemoryStorage`]. Session code only sees [`SessionStorage`],
//! so guard decisions never depend on a real persistence backend.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Minimal persistence capability: read, write and remove a string value.
///
/// Writes are fire-and-forget, matching `localStorage` semantics where a
/// quota or privacy-mode failure must not break the calling UI flow.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// In-process storage used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a storage pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries: Mutex::new(map) }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn clear(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Browser `localStorage`. Inert outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
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
            if let Some(storage) = browser_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
