//! Best-effort persistence of the signup form draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signup page saves the whole draft on every edit and restores it on the
//! next visit. A draft that cannot be stored must never interrupt the form, so
//! `save`, `load`, and `clear` are total: failures go to the injected
//! [`DraftReporter`] and the caller sees a no-op or `None`.
//!
//! TRADE-OFFS
//! ==========
//! The stored JSON carries no version tag. Older drafts still load because
//! every record field defaults to empty; anything that is not an object of
//! string fields is treated as corrupt and dropped.

#[cfg(test)]
#[path = "form_storage_test.rs"]
mod form_storage_test;

use std::fmt;

use crate::state::signup::DraftFormRecord;
use crate::util::storage_backend::{BrowserStorage, StorageBackend, StorageError};

/// Storage key for the single signup draft slot.
pub const DRAFT_STORAGE_KEY: &str = "signup-form-data";

/// Store operation a failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftOp {
    Save,
    Load,
    Clear,
}

impl fmt::Display for DraftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Save => "save",
            Self::Load => "load",
            Self::Clear => "clear",
        })
    }
}

/// Why a draft operation did not take effect.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("failed to serialize draft: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored draft is not a valid record: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Receives failures the draft stores swallow.
pub trait DraftReporter {
    fn report(&self, op: DraftOp, error: &DraftError);
}

impl<F: Fn(DraftOp, &DraftError)> DraftReporter for F {
    fn report(&self, op: DraftOp, error: &DraftError) {
        self(op, error);
    }
}

/// Default reporter: one warning line on the console.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl LogReporter {
    /// Console line written for a swallowed failure.
    pub fn message(op: DraftOp, error: &DraftError) -> String {
        format!("signup draft {op} failed: {error}")
    }
}

impl DraftReporter for LogReporter {
    fn report(&self, op: DraftOp, error: &DraftError) {
        leptos::logging::warn!("{}", Self::message(op, error));
    }
}

pub(crate) fn encode(record: &DraftFormRecord) -> Result<String, DraftError> {
    serde_json::to_string(record).map_err(DraftError::Serialize)
}

pub(crate) fn decode(raw: &str) -> Result<DraftFormRecord, DraftError> {
    serde_json::from_str(raw).map_err(DraftError::Deserialize)
}

/// Persists one [`DraftFormRecord`] under a fixed key of a [`StorageBackend`].
///
/// Holds no copy of the record; every call goes to the backend, and the
/// backend's availability is probed each time.
#[derive(Clone, Debug)]
pub struct FormDraftStore<B, R = LogReporter> {
    backend: B,
    reporter: R,
    key: String,
}

impl FormDraftStore<BrowserStorage> {
    /// Store over `window.localStorage`. Inert outside the hydrated client.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<B: StorageBackend> FormDraftStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            reporter: LogReporter,
            key: DRAFT_STORAGE_KEY.to_owned(),
        }
    }
}

impl<B: StorageBackend, R: DraftReporter> FormDraftStore<B, R> {
    /// Replace the failure reporter.
    pub fn with_reporter<R2: DraftReporter>(self, reporter: R2) -> FormDraftStore<B, R2> {
        FormDraftStore {
            backend: self.backend,
            reporter,
            key: self.key,
        }
    }

    /// Use `key` instead of [`DRAFT_STORAGE_KEY`], e.g. one slot per user.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write `record` over whatever draft is stored.
    pub fn save(&self, record: &DraftFormRecord) {
        if let Err(e) = self.try_save(record) {
            self.reporter.report(DraftOp::Save, &e);
        }
    }

    /// Read the stored draft. `None` when nothing usable is stored.
    pub fn load(&self) -> Option<DraftFormRecord> {
        self.try_load().unwrap_or_else(|e| {
            self.reporter.report(DraftOp::Load, &e);
            None
        })
    }

    /// Delete the stored draft.
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            self.reporter.report(DraftOp::Clear, &e);
        }
    }

    fn try_save(&self, record: &DraftFormRecord) -> Result<(), DraftError> {
        if !self.backend.is_available() {
            return Ok(());
        }
        let raw = encode(record)?;
        self.backend.set(&self.key, &raw)?;
        Ok(())
    }

    fn try_load(&self) -> Result<Option<DraftFormRecord>, DraftError> {
        if !self.backend.is_available() {
            return Ok(None);
        }
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        decode(&raw).map(Some)
    }

    fn try_clear(&self) -> Result<(), DraftError> {
        if !self.backend.is_available() {
            return Ok(());
        }
        self.backend.remove(&self.key)?;
        Ok(())
    }
}
