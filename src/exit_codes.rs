//! Exit code constants for the hookkit CLI.
//!
//! - 0: Success (including a check that ran and reported invalid input)
//! - 1: User error (bad args, malformed input, unreadable config)
//! - 2: Validation failure (only with `--strict`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed JSON input, or an invalid config file.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a `--strict` check produced an invalid result.
pub const VALIDATION_FAILURE: i32 = 2;
