use crate::cli::SortArgs;
use crate::error::Result;
use crate::geometry::sort_by_distance;
use crate::output::{PointRecord, formatter_for};
use crate::palette::{self, ColorRegistry};

use super::{AppContext, build_all, finish};

#[must_use]
pub fn run_sort(args: &SortArgs, ctx: &AppContext) -> i32 {
    finish(ctx, run_sort_impl(args, ctx, palette::global()))
}

/// Constructs the points and lists them by non-decreasing distance from the origin.
///
/// # Errors
/// Returns the first spec or construction error.
pub fn run_sort_impl(args: &SortArgs, ctx: &AppContext, registry: &ColorRegistry) -> Result<String> {
    let mut points = build_all(ctx, &args.points, args.kind, registry)?;
    ctx.note(&format!("sorting {} points", points.len()));
    sort_by_distance(&mut points);
    let records: Vec<PointRecord> = points.iter().map(super::AnyPoint::record).collect();
    formatter_for(ctx.format, true).format(&records)
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
