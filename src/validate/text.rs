//! Checks on string inputs: length, word count, and formats.

use super::engine::ValidationEngine;
use chrono::format::{ParseErrorKind, Parsed, StrftimeItems, parse};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Local part, `@`, domain, then a TLD of two or more letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

/// Default pattern for [`ValidationEngine::validate_date_format`].
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

impl ValidationEngine {
    /// Check that `text` has between `min_length` and `max_length` characters.
    ///
    /// Length counts Unicode scalar values, not bytes.
    pub fn validate_text_length(
        &mut self,
        text: &Value,
        min_length: usize,
        max_length: Option<usize>,
    ) -> bool {
        let Some(text) = text.as_str() else {
            return self.fail("text_length", "Input must be a string");
        };

        let length = text.chars().count();

        if length < min_length {
            return self.fail(
                "text_length",
                format!(
                    "Text too short: {} characters (minimum: {})",
                    length, min_length
                ),
            );
        }

        if let Some(max) = max_length
            && length > max
        {
            return self.fail(
                "text_length",
                format!("Text too long: {} characters (maximum: {})", length, max),
            );
        }

        true
    }

    /// Check the number of whitespace-separated words in `text`.
    pub fn validate_word_count(
        &mut self,
        text: &Value,
        min_words: usize,
        max_words: Option<usize>,
    ) -> bool {
        let Some(text) = text.as_str() else {
            return self.fail("word_count", "Input must be a string");
        };

        let word_count = text.split_whitespace().count();

        if word_count < min_words {
            return self.fail(
                "word_count",
                format!("Too few words: {} (minimum: {})", word_count, min_words),
            );
        }

        if let Some(max) = max_words
            && word_count > max
        {
            return self.fail(
                "word_count",
                format!("Too many words: {} (maximum: {})", word_count, max),
            );
        }

        true
    }

    pub fn validate_email(&mut self, email: &Value) -> bool {
        let Some(email) = email.as_str() else {
            return self.fail("email", "Email must be a string");
        };

        if !EMAIL_REGEX.is_match(email) {
            return self.fail("email", format!("Invalid email format: {}", email));
        }

        true
    }

    /// Check that `url` parses with both a scheme and a non-empty host.
    pub fn validate_url(&mut self, url: &Value) -> bool {
        let Some(raw) = url.as_str() else {
            return self.fail("url", "URL must be a string");
        };

        let has_host = url::Url::parse(raw)
            .map(|parsed| {
                !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|h| !h.is_empty())
            })
            .unwrap_or(false);

        if !has_host {
            return self.fail("url", format!("Invalid URL format: {}", raw));
        }

        true
    }

    pub fn validate_json(&mut self, json_str: &Value) -> bool {
        let Some(json_str) = json_str.as_str() else {
            return self.fail("json", "JSON input must be a string");
        };

        if let Err(e) = serde_json::from_str::<Value>(json_str) {
            return self.fail("json", format!("Invalid JSON: {}", e));
        }

        true
    }

    /// Check that `date` matches the strftime-style `pattern`.
    ///
    /// When the pattern yields a full year/month/day, the date must also exist
    /// (`2024-02-30` fails). Patterns without a full date only need to match.
    pub fn validate_date_format(&mut self, date: &Value, pattern: &str) -> bool {
        let Some(date) = date.as_str() else {
            return self.fail("date", "Date must be a string");
        };

        let mut parsed = Parsed::new();
        if let Err(e) = parse(&mut parsed, date, StrftimeItems::new(pattern)) {
            return self.fail("date", format!("Invalid date format: {}", e));
        }

        match parsed.to_naive_date() {
            Ok(_) => true,
            Err(e) if e.kind() == ParseErrorKind::NotEnough => true,
            Err(e) => self.fail("date", format!("Invalid date format: {}", e)),
        }
    }
}
