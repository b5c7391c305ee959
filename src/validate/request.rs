//! Named checks with their parameters, as accepted on the command line and
//! in pipeline JSON.
//!
//! Pipeline input looks like:
//!
//! ```json
//! {"check": "text-length", "params": {"text": "hello", "min_length": 1, "max_length": 10}}
//! ```

use super::engine::ValidationEngine;
use super::result::ValidationResult;
use super::text::DEFAULT_DATE_FORMAT;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One check and the input it runs against.
///
/// Subject values stay untyped `Value`s so a wrong input type is reported by
/// the check itself instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", content = "params", rename_all = "kebab-case")]
pub enum CheckRequest {
    TextLength {
        text: Value,
        #[serde(default)]
        min_length: usize,
        #[serde(default)]
        max_length: Option<usize>,
    },
    WordCount {
        text: Value,
        #[serde(default)]
        min_words: usize,
        #[serde(default)]
        max_words: Option<usize>,
    },
    Email {
        email: Value,
    },
    Url {
        url: Value,
    },
    Json {
        input: Value,
    },
    FileExists {
        path: Value,
    },
    FileExtension {
        path: Value,
        allowed_extensions: Vec<String>,
    },
    Date {
        date: Value,
        #[serde(default)]
        format: Option<String>,
    },
    Number {
        value: Value,
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    List {
        items: Value,
        #[serde(default)]
        item_rule: Option<ItemRule>,
        #[serde(default)]
        min_items: usize,
        #[serde(default)]
        max_items: Option<usize>,
    },
    RequiredFields {
        data: Value,
        fields: Vec<String>,
    },
    Platform {
        content: Value,
        platform: String,
    },
    WorkflowConfig {
        config: Value,
    },
}

impl CheckRequest {
    /// The check's name as used on the command line and in pipeline JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TextLength { .. } => "text-length",
            Self::WordCount { .. } => "word-count",
            Self::Email { .. } => "email",
            Self::Url { .. } => "url",
            Self::Json { .. } => "json",
            Self::FileExists { .. } => "file-exists",
            Self::FileExtension { .. } => "file-extension",
            Self::Date { .. } => "date",
            Self::Number { .. } => "number",
            Self::List { .. } => "list",
            Self::RequiredFields { .. } => "required-fields",
            Self::Platform { .. } => "platform",
            Self::WorkflowConfig { .. } => "workflow-config",
        }
    }

    /// Fill in a date pattern when the request did not name one.
    pub fn with_default_date_format(mut self, default_format: &str) -> Self {
        if let Self::Date { format, .. } = &mut self
            && format.is_none()
        {
            *format = Some(default_format.to_string());
        }
        self
    }

    /// Run this check on `engine`, returning whether it passed.
    pub fn run(&self, engine: &mut ValidationEngine) -> bool {
        match self {
            Self::TextLength {
                text,
                min_length,
                max_length,
            } => engine.validate_text_length(text, *min_length, *max_length),
            Self::WordCount {
                text,
                min_words,
                max_words,
            } => engine.validate_word_count(text, *min_words, *max_words),
            Self::Email { email } => engine.validate_email(email),
            Self::Url { url } => engine.validate_url(url),
            Self::Json { input } => engine.validate_json(input),
            Self::FileExists { path } => engine.validate_file_exists(path),
            Self::FileExtension {
                path,
                allowed_extensions,
            } => engine.validate_file_extension(path, allowed_extensions),
            Self::Date { date, format } => {
                engine.validate_date_format(date, format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT))
            }
            Self::Number { value, min, max } => engine.validate_numeric_range(value, *min, *max),
            Self::List {
                items,
                item_rule,
                min_items,
                max_items,
            } => match item_rule {
                Some(rule) => {
                    let rule = *rule;
                    let check = move |item: &Value| rule.check(item);
                    engine.validate_list_items(items, Some(&check), *min_items, *max_items)
                }
                None => engine.validate_list_items(items, None, *min_items, *max_items),
            },
            Self::RequiredFields { data, fields } => engine.validate_required_fields(data, fields),
            Self::Platform { content, platform } => {
                engine.validate_platform_content(content, platform)
            }
            Self::WorkflowConfig { config } => engine.validate_workflow_config(config),
        }
    }

    /// Run this check on a fresh engine and return its result.
    pub fn evaluate(&self) -> ValidationResult {
        let mut engine = ValidationEngine::new();
        self.run(&mut engine);
        engine.get_results()
    }
}

/// Named per-item predicates for the list check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ItemRule {
    /// Number greater than zero.
    Positive,
    /// Number greater than or equal to zero.
    NonNegative,
    /// Integral number.
    Integer,
    /// Non-blank string, non-empty list or object; null is empty.
    NonEmpty,
    /// Any string.
    String,
    /// String in email format.
    Email,
    /// String in URL format.
    Url,
}

impl ItemRule {
    /// Apply the rule to one item.
    ///
    /// Numeric rules return `Err` for non-numeric items, since there is no
    /// meaningful comparison to make.
    pub fn check(&self, item: &Value) -> Result<bool, String> {
        match self {
            Self::Positive => number(item).map(|n| n > 0.0),
            Self::NonNegative => number(item).map(|n| n >= 0.0),
            Self::Integer => Ok(item.is_i64() || item.is_u64()),
            Self::NonEmpty => Ok(match item {
                Value::Null => false,
                Value::String(s) => !s.trim().is_empty(),
                Value::Array(a) => !a.is_empty(),
                Value::Object(o) => !o.is_empty(),
                Value::Bool(_) | Value::Number(_) => true,
            }),
            Self::String => Ok(item.is_string()),
            Self::Email => Ok(ValidationEngine::new().validate_email(item)),
            Self::Url => Ok(ValidationEngine::new().validate_url(item)),
        }
    }
}

fn number(item: &Value) -> Result<f64, String> {
    item.as_f64()
        .ok_or_else(|| format!("expected a number, got {}", kind(item)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
