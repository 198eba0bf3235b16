mod error_output;
mod json;
mod text;

pub use error_output::{ErrorOutput, print_point_error};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{AdvancedPoint, ColorPoint, OriginDistance, Point, Render};
use crate::number::Number;

/// Trait for formatting points into various output formats.
pub trait OutputFormatter {
    /// Format the point records into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, records: &[PointRecord]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Which point type a record was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Point,
    Color,
    Advanced,
}

/// Flat, serializable view of any point type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    pub kind: PointKind,
    pub x: Number,
    pub y: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub distance_from_origin: f64,
    pub rendered: String,
}

impl From<&Point> for PointRecord {
    fn from(p: &Point) -> Self {
        Self {
            kind: PointKind::Point,
            x: p.x,
            y: p.y,
            color: None,
            distance_from_origin: p.distance_from_origin(),
            rendered: p.render(),
        }
    }
}

impl From<&ColorPoint> for PointRecord {
    fn from(p: &ColorPoint) -> Self {
        Self {
            kind: PointKind::Color,
            x: p.x(),
            y: p.y(),
            color: Some(p.color.clone()),
            distance_from_origin: p.distance_from_origin(),
            rendered: p.render(),
        }
    }
}

impl From<&AdvancedPoint> for PointRecord {
    fn from(p: &AdvancedPoint) -> Self {
        Self {
            kind: PointKind::Advanced,
            ..Self::from(p.as_color_point())
        }
    }
}

/// Builds the formatter for `format`.
#[must_use]
pub fn formatter_for(format: OutputFormat, inline: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(inline)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
