use std::fmt::Write;

use serde::Serialize;

use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::{OutputFormat, PointRecord};
use crate::palette::{self, ColorRegistry};

use super::{AnyPoint, AppContext, build_all, finish};

/// Outcome of comparing two points by distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relations {
    pub greater: bool,
    pub equal: bool,
    pub less: bool,
}

impl Relations {
    /// Applies `>`, `==` and `<`.
    #[must_use]
    pub fn between(a: &AnyPoint, b: &AnyPoint) -> Self {
        Self {
            greater: a > b,
            equal: a == b,
            less: a < b,
        }
    }
}

#[derive(Serialize)]
struct CompareOutput {
    first: PointRecord,
    second: PointRecord,
    #[serde(flatten)]
    relations: Relations,
}

#[must_use]
pub fn run_compare(args: &CompareArgs, ctx: &AppContext) -> i32 {
    finish(ctx, run_compare_impl(args, ctx, palette::global()))
}

/// Compares two points under the distance-from-origin contract.
///
/// # Errors
/// Returns a spec or construction error for either point.
pub fn run_compare_impl(
    args: &CompareArgs,
    ctx: &AppContext,
    registry: &ColorRegistry,
) -> Result<String> {
    let points = build_all(ctx, &[&args.first, &args.second], args.kind, registry)?;
    let (a, b) = (&points[0], &points[1]);
    let relations = Relations::between(a, b);

    match ctx.format {
        OutputFormat::Json => {
            let output = CompareOutput {
                first: a.record(),
                second: b.record(),
                relations,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "{a} > {b}: {}", relations.greater);
            let _ = writeln!(out, "{a} == {b}: {}", relations.equal);
            let _ = writeln!(out, "{a} < {b}: {}", relations.less);
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
