//! Snapshot of a validation run.

use serde::{Deserialize, Serialize};

/// Aggregate outcome of the checks run on one engine.
///
/// `valid` is true iff `errors` is empty; warnings never affect validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl ValidationResult {
    /// Build a result from error and warning lists.
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            error_count: errors.len(),
            warning_count: warnings.len(),
            errors,
            warnings,
        }
    }

    /// Result reported when a check could not be run at all
    /// (malformed input, unreadable file).
    pub fn internal_failure(detail: impl std::fmt::Display) -> Self {
        Self::new(vec![format!("Validation error: {}", detail)], Vec::new())
    }

    /// Errors joined into one line, for log and error messages.
    pub fn summary(&self) -> String {
        self.errors.join("; ")
    }
}
