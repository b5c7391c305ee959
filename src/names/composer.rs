//! Random two-word name composition.

use super::style::{Pairing, Style};
use super::vocabulary::VocabularySet;
use crate::error::{HookError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Composes names from the fixed vocabulary sets using an owned random source.
///
/// The generator is injected so tests can pass a seeded `StdRng`:
///
/// ```ignore
/// let mut composer = NameComposer::with_rng(StdRng::seed_from_u64(7));
/// let names = composer.generate(Style::Sprint, 3)?;
/// ```
#[derive(Debug)]
pub struct NameComposer<R: Rng = StdRng> {
    rng: R,
}

impl NameComposer<StdRng> {
    /// Create a composer seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a composer whose output is fixed by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for NameComposer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NameComposer<R> {
    /// Create a composer that draws from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate exactly `count` names in the given style.
    ///
    /// # Errors
    ///
    /// * `HookError::InvalidCount` - if `count` is zero
    pub fn generate(&mut self, style: Style, count: usize) -> Result<Vec<String>> {
        if count == 0 {
            return Err(HookError::InvalidCount(
                "Count must be at least 1".to_string(),
            ));
        }

        Ok((0..count).map(|_| self.generate_one(style)).collect())
    }

    /// Generate a single name. For `mixed`, a pairing is drawn first.
    pub fn generate_one(&mut self, style: Style) -> String {
        let pairing = match style.pairing() {
            Some(pairing) => pairing,
            None => Pairing::CONCRETE[self.rng.gen_range(0..Pairing::CONCRETE.len())],
        };

        let head = self.pick(&[pairing.first]);
        let tail = self.pick(pairing.second);
        format!("{} {}", head, tail)
    }

    /// Draw uniformly from the concatenation of `sets`.
    fn pick(&mut self, sets: &[VocabularySet]) -> &'static str {
        let total: usize = sets.iter().map(VocabularySet::len).sum();
        let mut index = self.rng.gen_range(0..total);

        sets.iter()
            .find_map(|set| {
                if index < set.len() {
                    Some(set.words[index])
                } else {
                    index -= set.len();
                    None
                }
            })
            .unwrap_or_default()
    }
}
