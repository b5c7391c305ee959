//! Configuration model for hookkit.
//!
//! Configuration is optional: without `--config`, [`Config::default`] applies.
//! YAML parsing is forward-compatible (unknown fields are ignored) and every
//! field has a default, so a partial file only overrides what it names.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
