//! Hookkit: project-name generator and input validator for workflow pipelines.
//!
//! The two engines are usable on their own:
//! - [`names::NameComposer`] composes random two-word project names.
//! - [`validate::ValidationEngine`] runs checks on JSON values and collects
//!   errors and warnings into a [`validate::ValidationResult`].
//!
//! The `cli` and `commands` modules wrap them for the `hookkit` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod names;
pub mod validate;

#[cfg(test)]
mod test_support;
