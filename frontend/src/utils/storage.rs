use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::UiError;

/// String key/value persistence, shaped after `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// Page-lifetime store. Used when localStorage is blocked, and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{local_storage, window, BrowserStore, WebStorage};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{KeyValueStore, MemoryStore};
    use crate::error::UiError;
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, UiError> {
        web_sys::window().ok_or(UiError::NoWindow)
    }

    pub fn local_storage() -> Result<Storage, UiError> {
        window()?
            .local_storage()
            .map_err(UiError::storage)?
            .ok_or_else(|| UiError::Storage("No localStorage".to_string()))
    }

    #[derive(Clone)]
    pub struct WebStorage {
        storage: Storage,
    }

    impl WebStorage {
        pub fn open() -> Result<Self, UiError> {
            Ok(Self {
                storage: local_storage()?,
            })
        }
    }

    impl KeyValueStore for WebStorage {
        fn get(&self, key: &str) -> Result<Option<String>, UiError> {
            self.storage.get_item(key).map_err(UiError::storage)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
            self.storage.set_item(key, value).map_err(UiError::storage)
        }
    }

    /// localStorage when the browser allows it, otherwise an in-memory map.
    #[derive(Clone)]
    pub enum BrowserStore {
        Local(WebStorage),
        Memory(MemoryStore),
    }

    impl BrowserStore {
        pub fn open() -> Self {
            Self::from_opened(WebStorage::open())
        }

        pub fn from_opened(opened: Result<WebStorage, UiError>) -> Self {
            match opened {
                Ok(storage) => BrowserStore::Local(storage),
                Err(err) => {
                    log::warn!("theme preference will not persist: {}", err);
                    BrowserStore::Memory(MemoryStore::new())
                }
            }
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, UiError> {
            match self {
                BrowserStore::Local(storage) => storage.get(key),
                BrowserStore::Memory(storage) => storage.get(key),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
            match self {
                BrowserStore::Local(storage) => storage.set(key, value),
                BrowserStore::Memory(storage) => storage.set(key, value),
            }
        }
    }
}
