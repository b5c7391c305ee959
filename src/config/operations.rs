//! Config loading and validation.

use super::model::Config;
use crate::error::{HookError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(HookError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HookError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| HookError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| HookError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `max_count` must be positive
    /// - `default_count` must be within `1..=max_count`
    /// - `date_format` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.max_count == 0 {
            return Err(HookError::UserError(
                "config validation failed: max_count must be greater than 0".to_string(),
            ));
        }

        if self.default_count == 0 || self.default_count > self.max_count {
            return Err(HookError::UserError(format!(
                "config validation failed: default_count must be between 1 and max_count ({}), found {}",
                self.max_count, self.default_count
            )));
        }

        if self.date_format.trim().is_empty() {
            return Err(HookError::UserError(
                "config validation failed: date_format must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether `count` is an accepted number of names.
    pub fn count_in_range(&self, count: usize) -> bool {
        (1..=self.max_count).contains(&count)
    }
}
