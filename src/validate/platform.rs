//! Per-platform content length limits.

use super::engine::ValidationEngine;
use serde_json::Value;
use std::fmt;

/// Publishing target with a known content length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LinkedIn,
    /// Twitter, also accepted as `x`.
    Twitter,
    /// A single conversation message.
    Conversation,
}

impl Platform {
    /// Look up a platform by name, case-insensitively. Surrounding
    /// whitespace is not stripped.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "linkedin" => Some(Self::LinkedIn),
            "twitter" | "x" => Some(Self::Twitter),
            "conversation" => Some(Self::Conversation),
            _ => None,
        }
    }

    /// Maximum content length in characters.
    pub fn max_chars(&self) -> usize {
        match self {
            Self::LinkedIn => 3000,
            Self::Twitter => 280,
            Self::Conversation => 40000,
        }
    }

    /// Limit as shown in error messages; the conversation limit is approximate.
    pub fn limit_label(&self) -> String {
        match self {
            Self::Conversation => format!("~{}", self.max_chars()),
            _ => self.max_chars().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkedIn => write!(f, "LinkedIn"),
            Self::Twitter => write!(f, "Twitter"),
            Self::Conversation => write!(f, "Conversation"),
        }
    }
}

impl ValidationEngine {
    /// Check `content` against the length limit of `platform`.
    ///
    /// Unrecognized platforms have no limit: the check passes and a warning is
    /// recorded.
    pub fn validate_platform_content(&mut self, content: &Value, platform: &str) -> bool {
        let Some(content) = content.as_str() else {
            return self.fail("platform_content", "Content must be a string");
        };

        let Some(known) = Platform::from_name(platform) else {
            self.add_warning(format!(
                "Unrecognized platform '{}': no length limit applied",
                platform
            ));
            return true;
        };

        let length = content.chars().count();

        if length > known.max_chars() {
            return self.fail(
                "platform_content",
                format!(
                    "{} content too long: {} characters (max: {})",
                    known,
                    length,
                    known.limit_label()
                ),
            );
        }

        true
    }
}
