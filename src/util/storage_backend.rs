//! Key-value storage facilities the draft stores write into.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` is the real backend in the hydrated client and wraps
//! `window.localStorage`. Outside the browser (SSR, native tests) it reports
//! itself unavailable. `MemoryStorage` and `NullStorage` stand in wherever a
//! caller wants a working or an absent facility without a browser.

#[cfg(test)]
#[path = "storage_backend_test.rs"]
mod storage_backend_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure reported by a storage facility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("storage remove failed: {0}")]
    Remove(String),
}

/// Synchronous string key-value facility.
pub trait StorageBackend {
    /// Whether the facility exists in the current execution context.
    ///
    /// Callers probe this before every operation; implementations must not
    /// assume the answer is cached.
    fn is_available(&self) -> bool {
        true
    }

    /// Read the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the facility rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` at `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] on quota or permission failures.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value at `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] if the facility rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

// =============================================================
// Browser localStorage
// =============================================================

/// `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn js_error_text(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl StorageBackend for BrowserStorage {
    fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            local_storage().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return Ok(None);
            };
            storage.get_item(key).map_err(|e| StorageError::Read(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return Ok(());
            };
            storage.set_item(key, value).map_err(|e| StorageError::Write(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return Ok(());
            };
            storage.remove_item(key).map_err(|e| StorageError::Remove(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

// =============================================================
// In-memory map
// =============================================================

/// Always-available storage backed by a shared `HashMap`.
///
/// Clones share the same map, so a test can keep one handle while a store
/// owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================
// Absent facility
// =============================================================

/// A facility that does not exist. Reads find nothing, writes vanish.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStorage;

impl StorageBackend for NullStorage {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
