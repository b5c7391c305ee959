//! Naming styles and their vocabulary pairings.

use super::vocabulary::{ACTIONS, ADJECTIVES, NATURAL_ELEMENTS, NOUNS, TECH_TERMS, VocabularySet};
use crate::error::HookError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Naming style requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Adjective + noun.
    Sprint,
    /// Tech term + action or noun.
    Tech,
    /// Natural element + action or noun.
    Nature,
    /// Sprint, tech or nature, chosen independently for each name.
    #[default]
    Mixed,
}

impl Style {
    /// Every style tag, in the order the CLI lists them.
    pub const ALL: [Style; 4] = [Style::Sprint, Style::Tech, Style::Nature, Style::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Sprint => "sprint",
            Style::Tech => "tech",
            Style::Nature => "nature",
            Style::Mixed => "mixed",
        }
    }

    /// The fixed pairing for this style. `None` for `mixed`, which draws one
    /// of [`Pairing::CONCRETE`] per name.
    pub fn pairing(&self) -> Option<Pairing> {
        match self {
            Style::Sprint => Some(Pairing::SPRINT),
            Style::Tech => Some(Pairing::TECH),
            Style::Nature => Some(Pairing::NATURE),
            Style::Mixed => None,
        }
    }
}

/// Vocabulary for the two slots of a name.
///
/// The trailing slot draws uniformly over the concatenation of `second`,
/// so a word listed in two sets is twice as likely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub first: VocabularySet,
    pub second: &'static [VocabularySet],
}

impl Pairing {
    pub const SPRINT: Pairing = Pairing {
        first: ADJECTIVES,
        second: &[NOUNS],
    };

    pub const TECH: Pairing = Pairing {
        first: TECH_TERMS,
        second: &[ACTIONS, NOUNS],
    };

    pub const NATURE: Pairing = Pairing {
        first: NATURAL_ELEMENTS,
        second: &[ACTIONS, NOUNS],
    };

    /// Pairings `mixed` chooses among.
    pub const CONCRETE: [Pairing; 3] = [Pairing::SPRINT, Pairing::TECH, Pairing::NATURE];

    /// Whether `name` has this pairing's shape: exactly two tokens, the first
    /// from `first` and the second from any of `second`.
    pub fn matches(&self, name: &str) -> bool {
        let mut tokens = name.split(' ');
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(head), Some(tail), None) => {
                self.first.contains(head) && self.second.iter().any(|set| set.contains(tail))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| HookError::InvalidStyle(s.to_string()))
    }
}
