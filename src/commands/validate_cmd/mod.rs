//! Implementation of the `hookkit validate` command.
//!
//! Each invocation runs exactly one check on a fresh engine and prints its
//! `ValidationResult` as JSON. An invalid result is still a successful run
//! unless `--strict` (or `strict: true` in config) is set.
//!
//! Input arguments that should be JSON (numbers, lists, objects) are parsed
//! leniently: text that is not valid JSON is passed on as a string, so the
//! check reports the type mismatch in its result.

use super::{read_pipeline_input, write_json};
use crate::cli::{ValidateAction, ValidateCommand};
use crate::config::Config;
use crate::error::{HookError, Result};
use crate::validate::{CheckRequest, ValidationResult};
use serde_json::Value;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info};


/// Execute the `hookkit validate` command.
pub fn cmd_validate(cmd: ValidateCommand, config: &Config) -> Result<()> {
    execute(cmd, config, io::stdin().lock(), &mut io::stdout().lock())
}

/// Run the command with pipeline input read from `input` and the JSON result
/// written to `out`.
pub(crate) fn execute<R: Read, W: Write>(
    cmd: ValidateCommand,
    config: &Config,
    input: R,
    out: &mut W,
) -> Result<()> {
    let strict = cmd.strict || config.strict;

    let request = if cmd.pipeline {
        request_from_pipeline(input)
    } else {
        match cmd.action {
            Some(action) => request_from_action(action),
            None => Err(HookError::UserError(
                "a check is required unless --pipeline is given (see `hookkit validate --help`)"
                    .to_string(),
            )),
        }
    };

    let result = match request {
        Ok(request) => run_request(request, config),
        Err(err) => {
            write_json(out, &ValidationResult::internal_failure(&err))?;
            return Err(err);
        }
    };

    write_json(out, &result)?;

    if strict && !result.valid {
        return Err(HookError::ValidationFailed(result.summary()));
    }

    Ok(())
}

/// Apply config defaults and evaluate the request on a fresh engine.
pub(crate) fn run_request(request: CheckRequest, config: &Config) -> ValidationResult {
    let request = request.with_default_date_format(&config.date_format);

    info!(check = request.name(), "running check");
    let result = request.evaluate();
    debug!(
        check = request.name(),
        valid = result.valid,
        errors = result.error_count,
        warnings = result.warning_count,
        "check finished"
    );

    result
}

/// Parse a `{"check": ..., "params": {...}}` request from `reader`.
pub(crate) fn request_from_pipeline<R: Read>(reader: R) -> Result<CheckRequest> {
    let context = read_pipeline_input(reader)?;
    serde_json::from_value(context)
        .map_err(|e| HookError::UserError(format!("invalid check request: {}", e)))
}

/// Build a request from positional command-line arguments.
pub(crate) fn request_from_action(action: ValidateAction) -> Result<CheckRequest> {
    let request = match action {
        ValidateAction::TextLength { text, min, max } => CheckRequest::TextLength {
            text: Value::String(text),
            min_length: min.unwrap_or(0),
            max_length: max,
        },
        ValidateAction::WordCount { text, min, max } => CheckRequest::WordCount {
            text: Value::String(text),
            min_words: min.unwrap_or(0),
            max_words: max,
        },
        ValidateAction::Email { email } => CheckRequest::Email {
            email: Value::String(email),
        },
        ValidateAction::Url { url } => CheckRequest::Url {
            url: Value::String(url),
        },
        ValidateAction::Json { input } => CheckRequest::Json {
            input: Value::String(input),
        },
        ValidateAction::FileExists { path } => CheckRequest::FileExists {
            path: Value::String(path),
        },
        ValidateAction::FileExtension { path, extensions } => CheckRequest::FileExtension {
            path: Value::String(path),
            allowed_extensions: extensions,
        },
        ValidateAction::Date { date, format } => CheckRequest::Date {
            date: Value::String(date),
            format,
        },
        ValidateAction::Number { value, min, max } => CheckRequest::Number {
            value: lenient_json(&value),
            min,
            max,
        },
        ValidateAction::List {
            items,
            min_items,
            max_items,
            item_rule,
        } => CheckRequest::List {
            items: lenient_json(&items),
            item_rule,
            min_items,
            max_items,
        },
        ValidateAction::RequiredFields { data, fields } => CheckRequest::RequiredFields {
            data: lenient_json(&data),
            fields,
        },
        ValidateAction::Platform { content, platform } => CheckRequest::Platform {
            content: Value::String(content),
            platform,
        },
        ValidateAction::WorkflowConfig { source } => CheckRequest::WorkflowConfig {
            config: workflow_source(&source)?,
        },
    };

    Ok(request)
}

/// Parse `raw` as JSON, falling back to the raw string.
fn lenient_json(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Inline JSON, or `@path` to a JSON or YAML file.
fn workflow_source(source: &str) -> Result<Value> {
    let Some(path) = source.strip_prefix('@') else {
        return Ok(lenient_json(source));
    };

    let path = Path::new(path);
    let content = std::fs::read_to_string(path).map_err(|e| {
        HookError::UserError(format!(
            "failed to read workflow config '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| {
            HookError::UserError(format!(
                "failed to parse workflow config '{}': {}",
                path.display(),
                e
            ))
        })
    } else {
        serde_json::from_str(&content).map_err(|e| {
            HookError::UserError(format!(
                "failed to parse workflow config '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
