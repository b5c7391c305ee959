//! CLI argument parsing for hookkit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::names::Style;
use crate::validate::ItemRule;
use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Hookkit: project-name generator and input validator for workflow pipelines.
///
/// Both commands accept parameters as arguments or, with `--pipeline`,
/// as a JSON object on standard input, and print JSON results.
#[derive(Parser, Debug)]
#[command(name = "hookkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hookkit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate random two-word project names.
    ///
    /// Styles: sprint (adjective + noun), tech (tech term + action/noun),
    /// nature (natural element + action/noun), mixed (any of the three).
    Names(NamesArgs),

    /// Validate one input against a named check.
    ///
    /// Prints a JSON result with `valid`, `errors` and `warnings`.
    Validate(ValidateCommand),
}

/// Arguments for the `names` command.
#[derive(Parser, Debug)]
pub struct NamesArgs {
    /// Number of names to generate (default from config: 5).
    #[arg(long)]
    pub count: Option<usize>,

    /// Naming style (default from config: mixed).
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Read `{"params": {"count": N, "style": S}}` from stdin and print a JSON result.
    #[arg(long)]
    pub pipeline: bool,

    /// Print the JSON result instead of a numbered list.
    #[arg(long)]
    pub json: bool,

    /// Seed the random source for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Read `{"check": NAME, "params": {...}}` from stdin instead of arguments.
    #[arg(long)]
    pub pipeline: bool,

    /// Exit with status 2 when the input is invalid.
    #[arg(long)]
    pub strict: bool,

    #[command(subcommand)]
    pub action: Option<ValidateAction>,
}

/// Available checks.
#[derive(Subcommand, Debug)]
pub enum ValidateAction {
    /// Check text length in characters.
    TextLength {
        text: String,
        /// Minimum length (default 0).
        min: Option<usize>,
        /// Maximum length (default unbounded).
        max: Option<usize>,
    },

    /// Check the number of whitespace-separated words.
    WordCount {
        text: String,
        /// Minimum words (default 0).
        min: Option<usize>,
        /// Maximum words (default unbounded).
        max: Option<usize>,
    },

    /// Check email format.
    Email { email: String },

    /// Check that a URL has a scheme and host.
    Url { url: String },

    /// Check that a string is well-formed JSON.
    Json { input: String },

    /// Check that a path exists.
    FileExists { path: String },

    /// Check a path's extension against an allow-list.
    FileExtension {
        path: String,
        /// Allowed extensions, with or without a leading dot.
        #[arg(required = true)]
        extensions: Vec<String>,
    },

    /// Check a date against a strftime pattern.
    Date {
        date: String,
        /// Pattern (default from config: %Y-%m-%d).
        #[arg(long)]
        format: Option<String>,
    },

    /// Check that a number is within bounds.
    Number {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
    },

    /// Check a JSON list's length and items.
    List {
        /// JSON array.
        items: String,
        #[arg(long, default_value_t = 0)]
        min_items: usize,
        #[arg(long)]
        max_items: Option<usize>,
        /// Rule every item must satisfy.
        #[arg(long, value_enum)]
        item_rule: Option<ItemRule>,
    },

    /// Check that a JSON object has non-null values for the given fields.
    RequiredFields {
        /// JSON object.
        data: String,
        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// Check content length against a platform's limit.
    Platform { content: String, platform: String },

    /// Check a workflow definition's structure.
    WorkflowConfig {
        /// JSON object, or `@path` to a JSON or YAML file.
        source: String,
    },
}

impl Cli {
    /// Parse command line arguments, returning clap's error instead of exiting.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}

/// Name of the subcommand in `args` (program name first), found without a
/// full parse so it is known even when parsing fails.
pub fn subcommand_name<I, T>(args: I) -> Option<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).skip(1);
    while let Some(arg) = args.next() {
        let arg = arg.to_string_lossy();
        if arg == "--config" {
            args.next();
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return Some(arg.into_owned());
    }
    None
}
