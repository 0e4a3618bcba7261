//! Minimal persistence seam for browser-local state.

use std::cell::RefCell;
use std::collections::HashMap;

use log::warn;

/// A string key-value store. The contact controller only ever needs
/// get/set/clear, so this is the whole seam; swap the backing store for
/// anything else (or an in-memory map in tests) without touching callers.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// Returns `None` when storage is unavailable: outside a browser, in
/// private browsing, or when access is denied.
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Browser `localStorage`. Every operation degrades gracefully; a visitor
/// without storage simply gets no cooldown persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValue for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            warn!("could not persist {key}; storage may be full or disabled");
        }
    }

    fn clear(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store, used by tests.
#[derive(Debug, Default)]
pub struct MemoryStore(RefCell<HashMap<String, String>>);

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        assert_eq!(store.get("k"), None);

        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));

        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));

        store.clear("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn clearing_a_missing_key_is_a_no_op() {
        let store = MemoryStore::default();
        store.clear("missing");
        assert_eq!(store.get("missing"), None);
    }
}
