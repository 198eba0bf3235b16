use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::number::Number;
use crate::palette::{self, ColorRegistry, DEFAULT_COLOR};

use super::{ColorPoint, OriginDistance, Render, euclidean};

/// A colored point whose color must be on an allow-list.
///
/// Unlike [`ColorPoint::try_new`], construction takes typed coordinates and
/// only validates the color. `x` can be changed after construction; `y` and
/// the color cannot.
#[derive(Clone)]
pub struct AdvancedPoint {
    inner: ColorPoint,
}

impl AdvancedPoint {
    /// Builds a point whose color is checked against the process-wide registry.
    ///
    /// # Errors
    /// Returns [`PointError::InvalidColor`](crate::PointError::InvalidColor)
    /// if `color` is not registered.
    pub fn new(x: impl Into<Number>, y: impl Into<Number>, color: &str) -> Result<Self> {
        Self::new_in(palette::global(), x, y, color)
    }

    /// Builds a point whose color is checked against `registry`.
    ///
    /// # Errors
    /// Returns [`PointError::InvalidColor`](crate::PointError::InvalidColor)
    /// if `color` is not in `registry`.
    pub fn new_in(
        registry: &ColorRegistry,
        x: impl Into<Number>,
        y: impl Into<Number>,
        color: &str,
    ) -> Result<Self> {
        registry.ensure_allowed(color)?;
        Ok(Self {
            inner: ColorPoint::new(x, y, color),
        })
    }

    /// Builds a point from an `(x, y)` pair.
    ///
    /// # Errors
    /// Returns [`PointError::InvalidColor`](crate::PointError::InvalidColor)
    /// if `color` is not registered.
    pub fn from_pair<X, Y>((x, y): (X, Y), color: &str) -> Result<Self>
    where
        X: Into<Number>,
        Y: Into<Number>,
    {
        Self::new(x, y, color)
    }

    /// Builds a [`DEFAULT_COLOR`] point from an `(x, y)` pair.
    ///
    /// # Errors
    /// Fails only if the default color is missing from the registry, which
    /// cannot happen since the registry only grows from a seed containing it.
    pub fn from_pair_default<X, Y>(pair: (X, Y)) -> Result<Self>
    where
        X: Into<Number>,
        Y: Into<Number>,
    {
        Self::from_pair(pair, DEFAULT_COLOR)
    }

    /// Appends `color` to the process-wide registry. Duplicates are kept and
    /// the addition lasts for the rest of the process.
    pub fn add_color(color: impl Into<String>) {
        palette::global().add(color);
    }

    /// Distance between two points.
    #[must_use]
    pub fn pairwise_distance(p1: &Self, p2: &Self) -> f64 {
        euclidean(&p1.inner.point, &p2.inner.point)
    }

    /// Distance from this point to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        Self::pairwise_distance(self, other)
    }

    #[must_use]
    pub const fn x(&self) -> Number {
        self.inner.point.x
    }

    pub fn set_x(&mut self, x: impl Into<Number>) {
        self.inner.point.x = x.into();
    }

    #[must_use]
    pub const fn y(&self) -> Number {
        self.inner.point.y
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.inner.color
    }

    #[must_use]
    pub const fn as_color_point(&self) -> &ColorPoint {
        &self.inner
    }
}

impl From<AdvancedPoint> for ColorPoint {
    fn from(point: AdvancedPoint) -> Self {
        point.inner
    }
}

impl OriginDistance for AdvancedPoint {
    fn distance_from_origin(&self) -> f64 {
        self.inner.distance_from_origin()
    }
}

impl Render for AdvancedPoint {
    fn render(&self) -> String {
        self.inner.render()
    }
}

impl fmt::Display for AdvancedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for AdvancedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl PartialEq for AdvancedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialOrd for AdvancedPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

#[cfg(test)]
#[path = "advanced_point_tests.rs"]
mod tests;
