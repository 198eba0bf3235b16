//! Point types and the capabilities they share.
//!
//! All three point types order and compare by distance from the origin, not
//! by coordinates: `(3, 4)` and `(5, 0)` are equal under this contract.

mod advanced_point;
mod color_point;
mod point;

use std::cmp::Ordering;

use crate::number::Number;

pub use advanced_point::AdvancedPoint;
pub use color_point::ColorPoint;
pub use point::Point;

/// Canonical text form of a point, shared by `Display` and `Debug`.
pub trait Render {
    fn render(&self) -> String;
}

/// Euclidean norm of a point's coordinates.
pub trait OriginDistance {
    fn distance_from_origin(&self) -> f64;
}

/// Distance between two points.
///
/// Integer gaps are squared and summed exactly; only the sum is rounded to
/// `f64`. A gap involving a float coordinate is computed in `f64`.
#[must_use]
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    match (SquaredGap::between(a.x, b.x), SquaredGap::between(a.y, b.y)) {
        (SquaredGap::Exact(dx), SquaredGap::Exact(dy)) => match dx.checked_add(dy) {
            Some(sum) => SquaredGap::Exact(sum).to_f64().sqrt(),
            None => (SquaredGap::Exact(dx).to_f64() + SquaredGap::Exact(dy).to_f64()).sqrt(),
        },
        (dx, dy) => (dx.to_f64() + dy.to_f64()).sqrt(),
    }
}

/// Square of the difference between two coordinates.
#[derive(Clone, Copy)]
enum SquaredGap {
    Exact(u128),
    Float(f64),
}

impl SquaredGap {
    fn between(a: Number, b: Number) -> Self {
        match (a, b) {
            (Number::Int(a), Number::Int(b)) => {
                // |a - b| < 2^64, so its square fits in u128.
                let d = (i128::from(a) - i128::from(b)).unsigned_abs();
                Self::Exact(d * d)
            }
            _ => {
                let d = a.as_f64() - b.as_f64();
                Self::Float(d * d)
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(self) -> f64 {
        match self {
            Self::Exact(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

/// Compares two points of any kind by distance from the origin.
///
/// Equality is exact floating-point equality. Returns `None` when either
/// distance is NaN.
pub fn compare_by_distance<A, B>(a: &A, b: &B) -> Option<Ordering>
where
    A: OriginDistance + ?Sized,
    B: OriginDistance + ?Sized,
{
    a.distance_from_origin().partial_cmp(&b.distance_from_origin())
}

/// Sorts by non-decreasing distance from the origin.
///
/// Equal-distance points end up in an unspecified relative order. NaN
/// distances sort last.
pub fn sort_by_distance<T: OriginDistance>(points: &mut [T]) {
    points.sort_unstable_by(|a, b| a.distance_from_origin().total_cmp(&b.distance_from_origin()));
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
