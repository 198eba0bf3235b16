use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Coordinate axis named in type-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PointError {
    #[error("{axis} must be a number (got {found})")]
    TypeMismatch { axis: Axis, found: &'static str },

    #[error("Invalid color '{color}', must be one of [{}]", .allowed.join(", "))]
    InvalidColor { color: String, allowed: Vec<String> },

    #[error("Invalid point spec '{input}': {reason}")]
    InvalidPointSpec { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PointError {
    /// Short category name shown as the error headline.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "Type",
            Self::InvalidColor { .. } => "Color",
            Self::InvalidPointSpec { .. } => "Input",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// The message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::TypeMismatch { axis, .. } => format!("{axis} must be a number"),
            Self::InvalidColor { color, .. } => format!("invalid color '{color}'"),
            Self::InvalidPointSpec { input, .. } => input.clone(),
            Self::Config(msg) => msg.clone(),
            Self::FileAccess { path, .. } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Secondary line with the underlying cause, when there is one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::TypeMismatch { found, .. } => Some(format!("found a value of kind '{found}'")),
            Self::InvalidColor { allowed, .. } => {
                Some(format!("allowed colors: {}", allowed.join(", ")))
            }
            Self::InvalidPointSpec { reason, .. } => Some(reason.clone()),
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TypeMismatch { .. } => Some("pass numeric coordinates, e.g. `3,4`"),
            Self::InvalidColor { .. } => {
                Some("pick an allowed color or add it with `--add-color` / `[palette] extra`")
            }
            Self::InvalidPointSpec { .. } => Some("point specs look like `X,Y` or `X,Y@COLOR`"),
            _ => None,
        }
    }

    /// Whether the error comes from bad point input rather than the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::InvalidColor { .. } | Self::InvalidPointSpec { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PointError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
