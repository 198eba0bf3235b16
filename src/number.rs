//! Numeric coordinate values and untyped input values.
//!
//! `Number` is what a constructed point stores. `Value` is what arrives from
//! untyped sources (command-line tokens, JSON, TOML) before validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, PointError, Result};

/// A numeric coordinate: integer or floating-point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) if v.is_nan() => f.write_str("nan"),
            Self::Float(v) if v.is_infinite() => write!(f, "{v}"),
            Self::Float(v) => write_float(f, v),
        }
    }
}

/// Shortest round-trip digits, positional for decimal exponents in
/// `[-4, 16)` and `1.5e+16` / `1e-07` style outside it. Whole positional
/// floats keep one fractional digit so `2.0` never reads as an integer.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let sci = format!("{v:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        if v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An input value whose type is only known at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Value {
    /// The numeric reading of this value. Booleans and text are not numbers.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match *self {
            Self::Int(i) => Some(Number::Int(i)),
            Self::Float(f) => Some(Number::Float(f)),
            Self::Bool(_) | Self::Text(_) => None,
        }
    }

    /// The numeric reading of this value as coordinate `axis`.
    ///
    /// # Errors
    /// Returns [`PointError::TypeMismatch`] if the value is not numeric.
    pub fn require_number(&self, axis: Axis) -> Result<Number> {
        self.as_number().ok_or(PointError::TypeMismatch {
            axis,
            found: self.kind(),
        })
    }

    /// Runtime kind name, reported in type-mismatch errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "str",
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Self::Int(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
