//! Input validation for pipeline data.
//!
//! A [`ValidationEngine`] runs individual checks against JSON values and
//! accumulates error and warning messages. Each check appends at most one
//! error and returns whether it passed; [`ValidationEngine::get_results`]
//! snapshots the accumulated state as a [`ValidationResult`].
//!
//! Checks are grouped by input kind:
//! - `text`: length, word count, email, URL, JSON, date
//! - `files`: existence and extension
//! - `structure`: numeric range, list items, required fields, workflow config
//! - `platform`: per-platform content length limits

mod engine;
mod files;
mod platform;
mod request;
mod result;
mod structure;
mod text;

#[cfg(test)]
mod tests;

// Re-export public API
pub use engine::ValidationEngine;
pub use platform::Platform;
pub use request::{CheckRequest, ItemRule};
pub use result::ValidationResult;
pub use structure::ItemValidator;
pub use text::DEFAULT_DATE_FORMAT;
