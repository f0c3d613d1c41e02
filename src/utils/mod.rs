//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window access, external links, scroll helpers
//! - [`log`] - `tracing` output to the browser console

pub mod dom;
pub mod log;
