//! Checks on numbers, lists, and mappings.

use super::engine::ValidationEngine;
use serde_json::Value;

/// Per-item predicate for [`ValidationEngine::validate_list_items`].
///
/// `Ok(false)` marks the item invalid; `Err(detail)` means the predicate could
/// not evaluate the item at all.
pub type ItemValidator = dyn Fn(&Value) -> Result<bool, String>;

impl ValidationEngine {
    /// Check that `value` is a number within the optional bounds (inclusive).
    pub fn validate_numeric_range(
        &mut self,
        value: &Value,
        min: Option<f64>,
        max: Option<f64>,
    ) -> bool {
        let Some(number) = value.as_f64() else {
            return self.fail("numeric_range", "Value must be numeric");
        };

        if let Some(min) = min
            && number < min
        {
            return self.fail(
                "numeric_range",
                format!("Value too small: {} (minimum: {})", value, min),
            );
        }

        if let Some(max) = max
            && number > max
        {
            return self.fail(
                "numeric_range",
                format!("Value too large: {} (maximum: {})", value, max),
            );
        }

        true
    }

    /// Check list length, then each item against `item_validator`.
    ///
    /// The scan stops at the first failing item.
    pub fn validate_list_items(
        &mut self,
        items: &Value,
        item_validator: Option<&ItemValidator>,
        min_items: usize,
        max_items: Option<usize>,
    ) -> bool {
        let Some(items) = items.as_array() else {
            return self.fail("list_items", "Input must be a list");
        };

        let item_count = items.len();

        if item_count < min_items {
            return self.fail(
                "list_items",
                format!("Too few items: {} (minimum: {})", item_count, min_items),
            );
        }

        if let Some(max) = max_items
            && item_count > max
        {
            return self.fail(
                "list_items",
                format!("Too many items: {} (maximum: {})", item_count, max),
            );
        }

        let Some(item_validator) = item_validator else {
            return true;
        };

        for (i, item) in items.iter().enumerate() {
            match item_validator(item) {
                Ok(true) => {}
                Ok(false) => {
                    return self.fail(
                        "list_items",
                        format!("Invalid item at index {}: {}", i, item),
                    );
                }
                Err(detail) => {
                    return self.fail(
                        "list_items",
                        format!("Validation error for item at index {}: {}", i, detail),
                    );
                }
            }
        }

        true
    }

    /// Check that every field in `required_fields` is present and non-null.
    ///
    /// Missing names are reported sorted.
    pub fn validate_required_fields(&mut self, data: &Value, required_fields: &[String]) -> bool {
        let Some(data) = data.as_object() else {
            return self.fail("required_fields", "Data must be a dictionary");
        };

        let mut missing: Vec<&str> = required_fields
            .iter()
            .filter(|field| data.get(field.as_str()).is_none_or(Value::is_null))
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            return true;
        }

        missing.sort_unstable();
        self.fail(
            "required_fields",
            format!("Missing required fields: {}", missing.join(", ")),
        )
    }

    /// Check the structure of a workflow definition:
    /// `name` and `phases` present, `phases` a non-empty list of objects that
    /// each have a `name` key.
    pub fn validate_workflow_config(&mut self, config: &Value) -> bool {
        if !config.is_object() {
            return self.fail("workflow_config", "Workflow config must be a dictionary");
        }

        let required = ["name".to_string(), "phases".to_string()];
        if !self.validate_required_fields(config, &required) {
            return false;
        }

        let phases = match config.get("phases").and_then(Value::as_array) {
            Some(phases) if !phases.is_empty() => phases,
            _ => {
                return self.fail("workflow_config", "Workflow must have at least one phase");
            }
        };

        for (i, phase) in phases.iter().enumerate() {
            let Some(phase) = phase.as_object() else {
                return self.fail("workflow_config", format!("Phase {} must be a dictionary", i));
            };

            if !phase.contains_key("name") {
                return self.fail(
                    "workflow_config",
                    format!("Phase {} missing 'name' field", i),
                );
            }
        }

        true
    }
}
