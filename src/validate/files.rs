//! Checks on file paths.

use super::engine::ValidationEngine;
use serde_json::Value;
use std::path::Path;

impl ValidationEngine {
    /// Check that `file_path` exists (file or directory) right now.
    pub fn validate_file_exists(&mut self, file_path: &Value) -> bool {
        let Some(file_path) = file_path.as_str() else {
            return self.fail("file_exists", "File path must be a string");
        };

        if !Path::new(file_path).exists() {
            return self.fail(
                "file_exists",
                format!("File does not exist: {}", file_path),
            );
        }

        true
    }

    /// Check that the extension of `file_path` is in `allowed_extensions`.
    ///
    /// Comparison is case-insensitive and ignores a leading dot on either side,
    /// so `.MD`, `md` and `.md` all allow `README.md`.
    pub fn validate_file_extension(
        &mut self,
        file_path: &Value,
        allowed_extensions: &[String],
    ) -> bool {
        let Some(file_path) = file_path.as_str() else {
            return self.fail("file_extension", "File path must be a string");
        };

        let ext = Path::new(file_path)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());

        let allowed = ext.as_deref().is_some_and(|ext| {
            allowed_extensions
                .iter()
                .any(|a| a.trim().trim_start_matches('.').to_lowercase() == ext)
        });

        if !allowed {
            let shown = match &ext {
                Some(ext) => format!(".{}", ext),
                None => "(none)".to_string(),
            };
            return self.fail(
                "file_extension",
                format!(
                    "Invalid file extension: {}. Allowed: {}",
                    shown,
                    allowed_extensions.join(", ")
                ),
            );
        }

        true
    }
}
