//! Implementation of the `hookkit names` command.
//!
//! Standalone mode prints a numbered list (or JSON with `--json`). Pipeline
//! mode reads `{"params": {"count": N, "style": S}}` from stdin and always
//! prints a JSON report; invalid parameters produce a `success: false` report
//! rather than an error exit.

use super::{print_json, read_pipeline_input};
use crate::cli::NamesArgs;
use crate::config::Config;
use crate::error::{HookError, Result};
use crate::names::{NameComposer, Style};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// JSON result of a name-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamesReport {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NamesReport {
    pub fn success(style: Style, generated: Vec<String>) -> Self {
        let count = generated.len();
        Self {
            success: true,
            style: Some(style),
            count: Some(count),
            error: None,
            generated,
            message: Some(format!(
                "Successfully generated {} {}-style project names",
                count, style
            )),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            style: None,
            count: None,
            error: Some(error.into()),
            generated: Vec::new(),
            message: None,
        }
    }
}

/// Execute the `hookkit names` command.
pub fn cmd_names(args: NamesArgs, config: &Config) -> Result<()> {
    let mut composer = match args.seed {
        Some(seed) => NameComposer::seeded(seed),
        None => NameComposer::new(),
    };

    if args.pipeline {
        let report = match read_pipeline_input(std::io::stdin().lock()) {
            Ok(context) => generate_for_pipeline(&context, config, &mut composer),
            Err(err) => {
                print_json(&NamesReport::failure(err.to_string()))?;
                return Err(err);
            }
        };
        return print_json(&report);
    }

    let count = args.count.unwrap_or(config.default_count);
    if !config.count_in_range(count) {
        return Err(count_error(config));
    }
    let style = args.style.unwrap_or(config.default_style);

    info!(%style, count, "generating names");
    let names = composer.generate(style, count)?;

    if args.json {
        print_json(&NamesReport::success(style, names))
    } else {
        print!("{}", render_list(&names));
        Ok(())
    }
}

/// Handle a pipeline request: validate `params`, then generate.
///
/// Parameter problems become a failure report; this never returns an error.
pub fn generate_for_pipeline<R: Rng>(
    context: &Value,
    config: &Config,
    composer: &mut NameComposer<R>,
) -> NamesReport {
    let params = context.get("params");

    let count = match params.and_then(|p| p.get("count")) {
        None => config.default_count,
        Some(value) => match value.as_u64().map(|n| n as usize) {
            Some(n) if config.count_in_range(n) => n,
            _ => {
                warn!(count = %value, "rejecting pipeline count");
                return NamesReport::failure(count_error(config).to_string());
            }
        },
    };

    let style = match params.and_then(|p| p.get("style")) {
        None => config.default_style,
        Some(value) => match value.as_str().map(str::parse::<Style>) {
            Some(Ok(style)) => style,
            Some(Err(err)) => {
                warn!(style = %value, "rejecting pipeline style");
                return NamesReport::failure(err.to_string());
            }
            None => {
                warn!(style = %value, "rejecting pipeline style");
                return NamesReport::failure(HookError::InvalidStyle(value.to_string()).to_string());
            }
        },
    };

    debug!(%style, count, "generating names for pipeline");
    match composer.generate(style, count) {
        Ok(names) => NamesReport::success(style, names),
        Err(err) => NamesReport::failure(format!("Name generation failed: {}", err)),
    }
}

/// Numbered, human-readable list of names.
pub fn render_list(names: &[String]) -> String {
    let mut out = String::from("🎲 Generated Project Names:\n");
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("{:2}. {}\n", i + 1, name));
    }
    out
}

fn count_error(config: &Config) -> HookError {
    HookError::InvalidCount(format!(
        "Count must be an integer between 1 and {}",
        config.max_count
    ))
}
