use std::cmp::Ordering;
use std::fmt;

use crate::number::Number;

use super::{OriginDistance, Render, compare_by_distance, euclidean};

/// A point on the plane with mutable coordinates.
///
/// Equality and ordering follow distance from the origin, so two points at
/// different positions can compare equal.
#[derive(Clone, Copy, Default)]
pub struct Point {
    pub x: Number,
    pub y: Number,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl OriginDistance for Point {
    fn distance_from_origin(&self) -> f64 {
        euclidean(self, &Self::default())
    }
}

impl Render for Point {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PartialEq for Point {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.distance_from_origin() == other.distance_from_origin()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_by_distance(self, other)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
