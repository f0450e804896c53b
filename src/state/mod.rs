//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Form state lives here as plain data so pages and storage helpers can share
//! one model without depending on each other.

pub mod signup;
