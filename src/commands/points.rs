//! Building typed points from parsed specs.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::geometry::{
    AdvancedPoint, ColorPoint, OriginDistance, Point, Render, compare_by_distance,
};
use crate::input::PointSpec;
use crate::output::{PointKind, PointRecord};
use crate::palette::ColorRegistry;

/// One point of whichever type the command asked for.
#[derive(Clone)]
pub enum AnyPoint {
    Point(Point),
    Color(ColorPoint),
    Advanced(AdvancedPoint),
}

impl AnyPoint {
    /// Constructs a point of `kind` from `spec`, checking it the way that
    /// type's constructor does.
    ///
    /// Plain points ignore the color. Colored points go through the checked
    /// constructor so non-numeric coordinates surface as type errors.
    /// Advanced points require numbers and an allowed color.
    ///
    /// # Errors
    /// Returns the constructor's error.
    pub fn build(
        spec: &PointSpec,
        kind: PointKind,
        default_color: &str,
        registry: &ColorRegistry,
    ) -> Result<Self> {
        let color = spec.color_or(default_color);
        match kind {
            PointKind::Point => {
                let (x, y) = spec.numbers()?;
                Ok(Self::Point(Point::new(x, y)))
            }
            PointKind::Color => Ok(Self::Color(ColorPoint::try_new(
                spec.x.clone(),
                spec.y.clone(),
                color,
            )?)),
            PointKind::Advanced => {
                let (x, y) = spec.numbers()?;
                Ok(Self::Advanced(AdvancedPoint::new_in(registry, x, y, color)?))
            }
        }
    }

    #[must_use]
    pub fn record(&self) -> PointRecord {
        match self {
            Self::Point(p) => p.into(),
            Self::Color(p) => p.into(),
            Self::Advanced(p) => p.into(),
        }
    }
}

impl OriginDistance for AnyPoint {
    fn distance_from_origin(&self) -> f64 {
        match self {
            Self::Point(p) => p.distance_from_origin(),
            Self::Color(p) => p.distance_from_origin(),
            Self::Advanced(p) => p.distance_from_origin(),
        }
    }
}

/// Same distance contract as the wrapped types, across kinds.
impl PartialEq for AnyPoint {
    fn eq(&self, other: &Self) -> bool {
        compare_by_distance(self, other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for AnyPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_by_distance(self, other)
    }
}

impl Render for AnyPoint {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => fmt::Display::fmt(p, f),
            Self::Color(p) => fmt::Display::fmt(p, f),
            Self::Advanced(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl fmt::Debug for AnyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Parses and builds every spec, stopping at the first failure.
///
/// # Errors
/// Returns the first parse or construction error.
pub fn build_all<S: AsRef<str>>(
    ctx: &super::AppContext,
    specs: &[S],
    kind: PointKind,
    registry: &ColorRegistry,
) -> Result<Vec<AnyPoint>> {
    ctx.parser
        .parse_all(specs)?
        .iter()
        .map(|spec| AnyPoint::build(spec, kind, ctx.default_color(), registry))
        .collect()
}

#[cfg(test)]
#[path = "points_tests.rs"]
mod tests;
