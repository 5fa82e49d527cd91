//! Key/Value Storage
//!
//! Thin seam over the browser's `localStorage` / `sessionStorage` so the
//! theme and session logic can run against an in-memory store in tests.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Durable key holding the persisted theme preference
pub const THEME_KEY: &str = "theme";

/// Tab-scoped key holding the analytics session identifier
pub const SESSION_ID_KEY: &str = "vl_session_id";

/// Minimal string key/value store
pub trait KeyValueStore {
    /// Read a value, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Returns `false` when the store refused the write
    /// (quota exceeded, private mode, storage disabled).
    fn set(&self, key: &str, value: &str) -> bool;
}

/// Browser-backed storage area
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Durable storage that survives across sessions
    pub fn local() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }

    /// Storage scoped to the lifetime of the current tab
    pub fn session() -> Option<Self> {
        let storage = web_sys::window()?.session_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.storage.set_item(key, value).is_ok()
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    read_only: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that accepts reads but refuses every write
    pub fn read_only() -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            read_only: true,
        }
    }

    /// Seed a value, bypassing the read-only flag
    pub fn with(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        if self.read_only {
            return false;
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_storage_roundtrip() {
        let store = BrowserStorage::session().expect("sessionStorage available");
        assert!(store.set("vl_test_key", "value"));
        assert_eq!(store.get("vl_test_key").as_deref(), Some("value"));
    }
}
