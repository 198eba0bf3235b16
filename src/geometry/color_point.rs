use std::cmp::Ordering;
use std::fmt;

use crate::error::{Axis, Result};
use crate::number::{Number, Value};

use super::{OriginDistance, Point, Render};

/// A point carrying a free-form color label.
///
/// Coordinates live in the embedded [`Point`]; distance, equality and
/// ordering are the point's.
#[derive(Clone, Default)]
pub struct ColorPoint {
    pub point: Point,
    pub color: String,
}

impl ColorPoint {
    /// Builds a colored point from already-numeric coordinates.
    #[must_use]
    pub fn new(x: impl Into<Number>, y: impl Into<Number>, color: impl Into<String>) -> Self {
        Self {
            point: Point::new(x, y),
            color: color.into(),
        }
    }

    /// Builds a colored point from untyped values, rejecting non-numeric
    /// coordinates. `x` is checked before `y`; the color is not checked.
    ///
    /// # Errors
    /// Returns [`PointError::TypeMismatch`](crate::PointError::TypeMismatch)
    /// naming the first non-numeric axis.
    pub fn try_new(
        x: impl Into<Value>,
        y: impl Into<Value>,
        color: impl Into<String>,
    ) -> Result<Self> {
        let x = x.into().require_number(Axis::X)?;
        let y = y.into().require_number(Axis::Y)?;
        Ok(Self::new(x, y, color))
    }

    #[must_use]
    pub const fn x(&self) -> Number {
        self.point.x
    }

    #[must_use]
    pub const fn y(&self) -> Number {
        self.point.y
    }
}

impl OriginDistance for ColorPoint {
    fn distance_from_origin(&self) -> f64 {
        self.point.distance_from_origin()
    }
}

impl Render for ColorPoint {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}, {}>", self.color, self.point.x, self.point.y)
    }
}

impl fmt::Debug for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PartialEq for ColorPoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl PartialOrd for ColorPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.point.partial_cmp(&other.point)
    }
}

#[cfg(test)]
#[path = "color_point_tests.rs"]
mod tests;
