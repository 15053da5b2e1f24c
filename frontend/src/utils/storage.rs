use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Synchronous string key/value store. Browser `localStorage` and
/// `sessionStorage` both fit this shape; tests use [`MemoryStorage`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

pub type SharedStore = Rc<dyn KeyValueStore>;

#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Rc::new(Self::new())
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn session_storage() -> Result<Storage, String> {
        window()?
            .session_storage()
            .map_err(|_| "No sessionStorage".to_string())?
            .ok_or_else(|| "No sessionStorage".to_string())
    }

    /// Wraps a `web_sys::Storage`. Reads and removals on an unavailable
    /// storage are no-ops; only writes report failure.
    pub struct BrowserStorage {
        inner: Option<Storage>,
    }

    impl BrowserStorage {
        pub fn local() -> Self {
            Self::from_result(local_storage())
        }

        pub fn session() -> Self {
            Self::from_result(session_storage())
        }

        fn from_result(storage: Result<Storage, String>) -> Self {
            match storage {
                Ok(storage) => Self {
                    inner: Some(storage),
                },
                Err(err) => {
                    log::warn!("storage unavailable: {}", err);
                    Self { inner: None }
                }
            }
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.as_ref()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            let storage = self.inner.as_ref().ok_or("Storage unavailable")?;
            storage
                .set_item(key, value)
                .map_err(|_| format!("Failed to store {}", key))
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = self.inner.as_ref() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{local_storage, session_storage, window, BrowserStorage};

/// Persistent store (survives tab close).
pub fn persistent_store() -> SharedStore {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStorage::local())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        MemoryStorage::shared()
    }
}

/// Tab-scoped store.
pub fn session_store() -> SharedStore {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStorage::session())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        MemoryStorage::shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_removes() {
        let store = MemoryStorage::new();
        assert!(store.get("k").is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.set("k", "w").unwrap();
        assert_eq!(store.len(), 1);
        store.remove("k");
        assert!(store.is_empty());
    }

    #[test]
    fn memory_storage_clones_share_items() {
        let store = MemoryStorage::new();
        let other = store.clone();
        store.set("theme", "dark").unwrap();
        assert_eq!(other.get("theme").as_deref(), Some("dark"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_session_storage_round_trips() {
        let store = BrowserStorage::session();
        store.set("wasm-test-key", "value").unwrap();
        assert_eq!(store.get("wasm-test-key").as_deref(), Some("value"));
        store.remove("wasm-test-key");
        assert!(store.get("wasm-test-key").is_none());
    }
}
