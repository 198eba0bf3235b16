//! Parsing of textual point specs such as `3,4` or `1.5,-2@teal`.

use regex::Regex;

use crate::error::{Axis, PointError, Result};
use crate::number::{Number, Value};

/// A point spec split into untyped coordinates and an optional color.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSpec {
    pub x: Value,
    pub y: Value,
    pub color: Option<String>,
}

impl PointSpec {
    /// Both coordinates as numbers, or the first axis that is not numeric.
    ///
    /// # Errors
    /// Returns [`PointError::TypeMismatch`] if either coordinate is not numeric.
    pub fn numbers(&self) -> Result<(Number, Number)> {
        Ok((self.x.require_number(Axis::X)?, self.y.require_number(Axis::Y)?))
    }

    #[must_use]
    pub fn color_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(fallback)
    }
}

/// Splits specs of the form `X,Y` or `X,Y@COLOR` and types each token.
pub struct SpecParser {
    spec_pattern: Regex,
    int_pattern: Regex,
    float_pattern: Regex,
}

impl Default for SpecParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            spec_pattern: Regex::new(
                r"^\s*\(?\s*(?P<x>[^,@()]*?)\s*,\s*(?P<y>[^,@()]*?)\s*\)?\s*(?:@\s*(?P<color>\S*)\s*)?$",
            )
            .expect("Invalid regex"),
            int_pattern: Regex::new(r"^[+-]?\d+$").expect("Invalid regex"),
            float_pattern: Regex::new(r"^[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?$")
                .expect("Invalid regex"),
        }
    }

    /// Parses one spec. Non-numeric coordinate tokens are kept as text so
    /// that callers decide whether to reject them.
    ///
    /// # Errors
    /// Returns [`PointError::InvalidPointSpec`] if the spec does not have two
    /// comma-separated coordinates, or a coordinate is empty.
    pub fn parse(&self, input: &str) -> Result<PointSpec> {
        let caps = self
            .spec_pattern
            .captures(input)
            .ok_or_else(|| invalid(input, "expected `X,Y` or `X,Y@COLOR`"))?;

        let x = &caps["x"];
        let y = &caps["y"];
        if x.is_empty() || y.is_empty() {
            return Err(invalid(input, "coordinates must not be empty"));
        }

        Ok(PointSpec {
            x: self.token_value(x),
            y: self.token_value(y),
            color: caps
                .name("color")
                .map(|m| m.as_str().to_string())
                .filter(|c| !c.is_empty()),
        })
    }

    /// Parses each spec in order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first spec's parse error.
    pub fn parse_all<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<PointSpec>> {
        inputs.iter().map(|s| self.parse(s.as_ref())).collect()
    }

    /// Types a single token: integer, float, boolean, or text.
    #[must_use]
    pub fn token_value(&self, token: &str) -> Value {
        if self.int_pattern.is_match(token)
            && let Ok(i) = token.parse::<i64>()
        {
            return Value::Int(i);
        }
        if self.float_pattern.is_match(token)
            && let Ok(f) = token.parse::<f64>()
        {
            return Value::Float(f);
        }
        match token {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Text(token.to_string()),
        }
    }
}

fn invalid(input: &str, reason: &str) -> PointError {
    PointError::InvalidPointSpec {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
