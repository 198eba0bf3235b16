use std::fmt::Write;

use serde::Serialize;

use crate::cli::RandomArgs;
use crate::error::{PointError, Result};
use crate::geometry::{ColorPoint, Point, sort_by_distance};
use crate::output::{OutputFormat, PointRecord};

use super::{AnyPoint, AppContext, finish};

#[derive(Serialize)]
struct RandomOutput {
    points: Vec<PointRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sorted: Option<Vec<PointRecord>>,
}

#[must_use]
pub fn run_random(args: &RandomArgs, ctx: &AppContext) -> i32 {
    finish(ctx, run_random_impl(args, ctx))
}

/// Generates integer points in `[-range, range]`, colored when a color list
/// is given, and optionally lists them sorted by distance from the origin.
///
/// # Errors
/// Returns [`PointError::Config`] for a negative range.
pub fn run_random_impl(args: &RandomArgs, ctx: &AppContext) -> Result<String> {
    let range = args.range.unwrap_or(ctx.config.defaults.random_range);
    if range < 0 {
        return Err(PointError::Config(format!(
            "random range must be non-negative, got {range}"
        )));
    }

    let mut rng = args.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let points = generate(&mut rng, args.count, range, &args.colors);
    ctx.note(&format!("generated {} points in [-{range}, {range}]", points.len()));

    let sorted = args.sort.then(|| {
        let mut sorted = points.clone();
        sort_by_distance(&mut sorted);
        sorted
    });

    let records = |pts: &[AnyPoint]| pts.iter().map(AnyPoint::record).collect::<Vec<_>>();

    match ctx.format {
        OutputFormat::Json => {
            let output = RandomOutput {
                points: records(&points),
                sorted: sorted.as_deref().map(records),
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "Generated points:");
            let _ = writeln!(out, "{points:?}");
            if let Some(sorted) = sorted {
                let _ = writeln!(out, "Sorted by distance from origin:");
                let _ = writeln!(out, "{sorted:?}");
            }
            Ok(out)
        }
    }
}

/// Draws `count` points. With an empty color list the points are plain.
pub fn generate(rng: &mut fastrand::Rng, count: usize, range: i64, colors: &[String]) -> Vec<AnyPoint> {
    (0..count)
        .map(|_| {
            let x = rng.i64(-range..=range);
            let y = rng.i64(-range..=range);
            if colors.is_empty() {
                AnyPoint::Point(Point::new(x, y))
            } else {
                let color = &colors[rng.usize(..colors.len())];
                AnyPoint::Color(ColorPoint::new(x, y, color.as_str()))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod tests;
