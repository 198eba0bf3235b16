use serde::Serialize;

use crate::cli::DistanceArgs;
use crate::error::Result;
use crate::geometry::AdvancedPoint;
use crate::output::{OutputFormat, PointRecord};
use crate::palette::{self, ColorRegistry};

use super::{AppContext, finish};

#[derive(Serialize)]
struct DistanceOutput {
    from: PointRecord,
    to: PointRecord,
    distance: f64,
}

#[must_use]
pub fn run_distance(args: &DistanceArgs, ctx: &AppContext) -> i32 {
    finish(ctx, run_distance_impl(args, ctx, palette::global()))
}

/// Distance between two allow-listed points. Specs without a color use the
/// configured default color.
///
/// # Errors
/// Returns a spec, type or color error for either point.
pub fn run_distance_impl(
    args: &DistanceArgs,
    ctx: &AppContext,
    registry: &ColorRegistry,
) -> Result<String> {
    let build = |input: &str| -> Result<AdvancedPoint> {
        let spec = ctx.parser.parse(input)?;
        let (x, y) = spec.numbers()?;
        AdvancedPoint::new_in(registry, x, y, spec.color_or(ctx.default_color()))
    };
    let from = build(&args.from)?;
    let to = build(&args.to)?;
    let distance = AdvancedPoint::pairwise_distance(&from, &to);

    match ctx.format {
        OutputFormat::Json => {
            let output = DistanceOutput {
                from: PointRecord::from(&from),
                to: PointRecord::from(&to),
                distance,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
        OutputFormat::Text => Ok(format!(
            "{from} -> {to}: {}\n",
            crate::number::Number::Float(distance)
        )),
    }
}

#[cfg(test)]
#[path = "distance_tests.rs"]
mod tests;
