//! Async variant of the signup draft store.
//!
//! Some storage facilities only expose asynchronous access (IndexedDB-style
//! stores, native async key-value stores). `AsyncFormDraftStore` keeps the
//! same save/load/clear contract as [`FormDraftStore`](super::form_storage::FormDraftStore)
//! over such a facility. Every synchronous [`StorageBackend`] is usable here as-is.

#[cfg(test)]
#[path = "form_storage_async_test.rs"]
mod form_storage_async_test;

use crate::state::signup::DraftFormRecord;
use crate::util::form_storage::{DRAFT_STORAGE_KEY, DraftError, DraftOp, DraftReporter, LogReporter, decode, encode};
use crate::util::storage_backend::{StorageBackend, StorageError};

/// Asynchronous string key-value facility.
///
/// Futures are not `Send`; browser storage handles cannot cross threads.
#[async_trait::async_trait(?Send)]
pub trait AsyncStorageBackend {
    async fn is_available(&self) -> bool {
        true
    }

    /// Read the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the facility rejects the read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` at `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] on quota or permission failures.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value at `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] if the facility rejects the delete.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[async_trait::async_trait(?Send)]
impl<T: StorageBackend + ?Sized> AsyncStorageBackend for T {
    async fn is_available(&self) -> bool {
        StorageBackend::is_available(self)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        StorageBackend::get(self, key)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        StorageBackend::set(self, key, value)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        StorageBackend::remove(self, key)
    }
}

/// Persists one [`DraftFormRecord`] through an [`AsyncStorageBackend`].
#[derive(Clone, Debug)]
pub struct AsyncFormDraftStore<B, R = LogReporter> {
    backend: B,
    reporter: R,
    key: String,
}

impl<B: AsyncStorageBackend> AsyncFormDraftStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            reporter: LogReporter,
            key: DRAFT_STORAGE_KEY.to_owned(),
        }
    }
}

impl<B: AsyncStorageBackend, R: DraftReporter> AsyncFormDraftStore<B, R> {
    pub fn with_reporter<R2: DraftReporter>(self, reporter: R2) -> AsyncFormDraftStore<B, R2> {
        AsyncFormDraftStore {
            backend: self.backend,
            reporter,
            key: self.key,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn save(&self, record: &DraftFormRecord) {
        if let Err(e) = self.try_save(record).await {
            self.reporter.report(DraftOp::Save, &e);
        }
    }

    pub async fn load(&self) -> Option<DraftFormRecord> {
        match self.try_load().await {
            Ok(record) => record,
            Err(e) => {
                self.reporter.report(DraftOp::Load, &e);
                None
            }
        }
    }

    pub async fn clear(&self) {
        if let Err(e) = self.try_clear().await {
            self.reporter.report(DraftOp::Clear, &e);
        }
    }

    async fn try_save(&self, record: &DraftFormRecord) -> Result<(), DraftError> {
        if !self.backend.is_available().await {
            return Ok(());
        }
        let raw = encode(record)?;
        self.backend.set(&self.key, &raw).await?;
        Ok(())
    }

    async fn try_load(&self) -> Result<Option<DraftFormRecord>, DraftError> {
        if !self.backend.is_available().await {
            return Ok(None);
        }
        let Some(raw) = self.backend.get(&self.key).await? else {
            return Ok(None);
        };
        decode(&raw).map(Some)
    }

    async fn try_clear(&self) -> Result<(), DraftError> {
        if !self.backend.is_available().await {
            return Ok(());
        }
        self.backend.remove(&self.key).await?;
        Ok(())
    }
}
