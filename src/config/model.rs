use serde::{Deserialize, Serialize};

use crate::error::{PointError, Result};
use crate::output::OutputFormat;
use crate::palette::{ColorRegistry, DEFAULT_COLOR};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default half-width of the square random points are drawn from.
pub const DEFAULT_RANDOM_RANGE: i64 = 10;

/// Colors appended to the shared allow-list at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Extra allowed colors, appended in order (duplicates kept).
    #[serde(default)]
    pub extra: Vec<String>,
}

/// Values the command line falls back to when an argument is omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Color for point specs without `@COLOR`.
    #[serde(default = "default_color")]
    pub color: String,

    /// Coordinates of random points fall in `[-random_range, random_range]`.
    #[serde(default = "default_random_range")]
    pub random_range: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            random_range: DEFAULT_RANDOM_RANGE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version. Absent means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub palette: PaletteConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Checks values serde cannot express.
    ///
    /// # Errors
    /// Returns [`PointError::Config`] for an unsupported version, an empty
    /// default or extra color, or a negative random range.
    pub fn validate(&self) -> Result<()> {
        match &self.version {
            None => {}
            Some(v) if v == CONFIG_VERSION => {}
            Some(v) => {
                return Err(PointError::Config(format!(
                    "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
                )));
            }
        }

        if self.defaults.color.is_empty() {
            return Err(PointError::Config(
                "defaults.color must not be empty".to_string(),
            ));
        }

        if let Some(pos) = self.palette.extra.iter().position(String::is_empty) {
            return Err(PointError::Config(format!(
                "palette.extra[{pos}] must not be empty"
            )));
        }

        if self.defaults.random_range < 0 {
            return Err(PointError::Config(format!(
                "defaults.random_range must be non-negative, got {}",
                self.defaults.random_range
            )));
        }

        Ok(())
    }

    /// Appends the configured extra colors to `registry`.
    pub fn apply_palette(&self, registry: &ColorRegistry) {
        registry.extend(self.palette.extra.iter().cloned());
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

const fn default_random_range() -> i64 {
    DEFAULT_RANDOM_RANGE
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
