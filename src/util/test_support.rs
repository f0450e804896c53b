//! Fixtures shared by the draft store tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::state::signup::DraftFormRecord;
use crate::util::form_storage::{DraftError, DraftOp};
use crate::util::storage_backend::{MemoryStorage, StorageBackend, StorageError};

pub fn jane() -> DraftFormRecord {
    DraftFormRecord {
        name: "Jane".to_owned(),
        company_name: "Acme".to_owned(),
        company_email: "jane@acme.co".to_owned(),
        company_website: "acme.co".to_owned(),
        company_size: "11-50".to_owned(),
        phone: "5551234567".to_owned(),
        password: "hunter2".to_owned(),
    }
}

pub fn bob() -> DraftFormRecord {
    DraftFormRecord {
        name: "Bob".to_owned(),
        company_name: "Initech".to_owned(),
        company_size: "1-10".to_owned(),
        ..DraftFormRecord::default()
    }
}

/// Failures seen by a closure reporter, as `(op, message)`.
pub type Reports = Rc<RefCell<Vec<(DraftOp, String)>>>;

pub fn recording_reporter() -> (Reports, impl Fn(DraftOp, &DraftError)) {
    let reports: Reports = Rc::default();
    let sink = reports.clone();
    let reporter = move |op: DraftOp, error: &DraftError| sink.borrow_mut().push((op, error.to_string()));
    (reports, reporter)
}

/// Memory storage whose operations can be made to fail on demand.
#[derive(Clone, Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub fail_reads: Rc<Cell<bool>>,
    pub fail_writes: Rc<Cell<bool>>,
    pub fail_removes: Rc<Cell<bool>>,
    pub available: Rc<Cell<bool>>,
}

impl FlakyStorage {
    pub fn new() -> Self {
        let storage = Self::default();
        storage.available.set(true);
        storage
    }
}

impl StorageBackend for FlakyStorage {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Read("SecurityError".to_owned()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("QuotaExceededError".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_removes.get() {
            return Err(StorageError::Remove("SecurityError".to_owned()));
        }
        self.inner.remove(key)
    }
}
