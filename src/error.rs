//! Error types for the hookkit CLI.
//!
//! Uses thiserror for derive macros. Per-check validation failures are not
//! errors; they are recorded as messages on the validation engine.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hookkit operations.
#[derive(Error, Debug)]
pub enum HookError {
    /// User provided invalid arguments, input, or configuration.
    #[error("{0}")]
    UserError(String),

    /// Requested naming style is not one of the known styles.
    #[error("Style must be one of: sprint, tech, nature, mixed")]
    InvalidStyle(String),

    /// Requested name count is outside the accepted range.
    #[error("{0}")]
    InvalidCount(String),

    /// A strict validation run produced an invalid result.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl HookError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::UserError(_) => exit_codes::USER_ERROR,
            HookError::InvalidStyle(_) => exit_codes::USER_ERROR,
            HookError::InvalidCount(_) => exit_codes::USER_ERROR,
            HookError::ValidationFailed(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for hookkit operations.
pub type Result<T> = std::result::Result<T, HookError>;
