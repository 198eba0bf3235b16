use std::fmt::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::cli::ColorsArgs;
use crate::error::Result;
use crate::output::OutputFormat;
use crate::palette::{self, ColorRegistry};

use super::{AppContext, finish};

#[derive(Serialize)]
#[serde(untagged)]
enum ColorsOutput {
    List { colors: Vec<String> },
    Counts { counts: IndexMap<String, usize> },
}

#[must_use]
pub fn run_colors(args: &ColorsArgs, ctx: &AppContext) -> i32 {
    finish(ctx, run_colors_impl(args, ctx, palette::global()))
}

/// Lists the allow-list in registration order, optionally with how often
/// each color was registered.
///
/// # Errors
/// Returns an error only if JSON serialization fails.
pub fn run_colors_impl(
    args: &ColorsArgs,
    ctx: &AppContext,
    registry: &ColorRegistry,
) -> Result<String> {
    let output = if args.counts {
        ColorsOutput::Counts {
            counts: registry.counts(),
        }
    } else {
        ColorsOutput::List {
            colors: registry.snapshot(),
        }
    };

    match ctx.format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&output)?)),
        OutputFormat::Text => {
            let mut out = String::new();
            match output {
                ColorsOutput::List { colors } => {
                    for color in colors {
                        let _ = writeln!(out, "{color}");
                    }
                }
                ColorsOutput::Counts { counts } => {
                    for (color, count) in counts {
                        let _ = writeln!(out, "{color}\t{count}");
                    }
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
