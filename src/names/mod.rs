//! Project-name generation.
//!
//! Names are two words: one drawn from a leading vocabulary set and one from a
//! trailing set, selected by a [`Style`]:
//! - `sprint`: adjective + noun
//! - `tech`: tech term + action or noun
//! - `nature`: natural element + action or noun
//! - `mixed`: one of the three above, chosen per name

mod composer;
mod style;
pub mod vocabulary;


// Re-export public API
pub use composer::NameComposer;
pub use style::{Pairing, Style};
pub use vocabulary::VocabularySet;
