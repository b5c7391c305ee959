//! Validation engine state.

use super::result::ValidationResult;
use tracing::{debug, warn};

/// Accumulates error and warning messages across a sequence of checks.
///
/// Use one engine per validation run, or call [`reset`](Self::reset) between
/// independent runs. The engine never deduplicates: running the same failing
/// check twice records the message twice.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all errors and warnings.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(warning = %message, "validation warning");
        self.warnings.push(message);
    }

    /// True while no check has recorded an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Snapshot the current state without modifying it.
    pub fn get_results(&self) -> ValidationResult {
        ValidationResult::new(self.errors.clone(), self.warnings.clone())
    }

    /// Record a failed check. Always returns `false` so checks can
    /// `return self.fail(...)`.
    pub(super) fn fail(&mut self, check: &'static str, message: impl Into<String>) -> bool {
        let message = message.into();
        debug!(check, error = %message, "check failed");
        self.errors.push(message);
        false
    }
}
