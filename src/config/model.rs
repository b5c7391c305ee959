//! Config struct definition and default implementation.

use super::types::*;
use crate::names::Style;
use serde::{Deserialize, Serialize};

/// Configuration for the hookkit commands.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Name generation
    // =========================================================================
    /// Number of names generated when no count is given.
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Largest count accepted from the command line or pipeline input.
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// Style used when no style is given.
    #[serde(default)]
    pub default_style: Style,

    // =========================================================================
    // Validation
    // =========================================================================
    /// strftime pattern for the `date` check when none is given.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Exit with a validation-failure code when a check is invalid.
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            max_count: default_max_count(),
            default_style: Style::default(),
            date_format: default_date_format(),
            strict: false,
        }
    }
}
