use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::{PointRecord, formatter_for};
use crate::palette::{self, ColorRegistry};

use super::{AppContext, build_all, finish};

#[must_use]
pub fn run_show(args: &ShowArgs, ctx: &AppContext) -> i32 {
    finish(ctx, run_show_impl(args, ctx, palette::global()))
}

/// Constructs each point and formats it with its distance from the origin.
///
/// # Errors
/// Returns the first spec or construction error.
pub fn run_show_impl(args: &ShowArgs, ctx: &AppContext, registry: &ColorRegistry) -> Result<String> {
    let points = build_all(ctx, &args.points, args.kind, registry)?;
    let records: Vec<PointRecord> = points.iter().map(super::AnyPoint::record).collect();
    formatter_for(ctx.format, false).format(&records)
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
