//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod form_storage;
pub mod form_storage_async;
pub mod storage_backend;

#[cfg(test)]
pub(crate) mod test_support;
