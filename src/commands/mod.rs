//! Command implementations for hookkit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the stdin/stdout helpers both commands share.

mod names;
mod validate_cmd;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{HookError, Result};
use crate::exit_codes;
use crate::validate::ValidationResult;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Read, Write};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Names(args) => names::cmd_names(args, config),
        Command::Validate(cmd) => validate_cmd::cmd_validate(cmd, config),
    }
}

/// Report a command-line parse error and return the exit code to use.
///
/// Help and version requests exit through clap. Under `validate`, the error
/// is also printed to stdout as a failed `ValidationResult`.
pub fn report_parse_error(err: clap::Error, validate: bool) -> i32 {
    if !err.use_stderr() {
        err.exit();
    }

    if validate
        && let Err(print_err) = write_json(&mut io::stdout().lock(), &parse_failure(&err))
    {
        eprintln!("Error: {}", print_err);
    }
    let _ = err.print();

    exit_codes::USER_ERROR
}

/// Failed result describing a command-line parse error on one line.
pub(crate) fn parse_failure(err: &clap::Error) -> ValidationResult {
    let rendered = err.render().to_string();
    let detail = rendered
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.starts_with("Usage:")
                && !line.starts_with("For more information")
        })
        .map(|line| line.strip_prefix("error: ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join(" ");

    ValidationResult::internal_failure(detail)
}

/// Write the JSON failure object `command` owes its caller when it cannot
/// start at all, such as when the config file fails to load.
///
/// `validate` always answers with a `ValidationResult`; `names` only does so
/// in pipeline mode.
pub fn report_startup_failure<W: Write>(
    command: &Command,
    err: &HookError,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Validate(_) => write_json(out, &ValidationResult::internal_failure(err)),
        Command::Names(args) if args.pipeline => {
            write_json(out, &names::NamesReport::failure(err.to_string()))
        }
        Command::Names(_) => Ok(()),
    }
}

/// Read the whole of `reader` and parse it as one JSON value.
pub(crate) fn read_pipeline_input<R: Read>(mut reader: R) -> Result<Value> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| HookError::UserError(format!("failed to read pipeline input: {}", e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| HookError::UserError(format!("invalid pipeline input JSON: {}", e)))
}

/// Render `value` as indented JSON.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| HookError::UserError(format!("failed to serialize result: {}", e)))
}

/// Write `value` to `out` as indented JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", to_pretty_json(value)?)
        .map_err(|e| HookError::UserError(format!("failed to write result: {}", e)))
}

/// Print `value` to stdout as indented JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    write_json(&mut io::stdout().lock(), value)
}
