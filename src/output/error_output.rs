//! Colored diagnostics on stderr.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`.
//! Verbose notes use `· message`.

use std::io::{IsTerminal, Write};

use crate::error::PointError;

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        // Per <https://no-color.org>, presence of the variable disables color.
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a point error with its detail and suggestion.
    pub fn print_error(&self, err: &PointError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, err);
    }

    /// Prints a warning message.
    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    /// Prints a verbose progress note.
    pub fn print_note(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_note(&mut stderr, message);
    }

    /// Writes an error to a writer.
    pub fn write_error<W: Write>(&self, w: &mut W, err: &PointError) {
        // Write failures on stderr are dropped; there is nowhere left to report them.
        let error_type = err.error_type();
        let message = err.message();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = err.detail() {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = err.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
    }

    /// Writes a verbose note to a writer.
    pub fn write_note<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(w, "{}· {message}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "· {message}");
        }
    }
}

/// Convenience function: prints an error using auto-detected color mode.
pub fn print_point_error(err: &PointError) {
    ErrorOutput::stderr().print_error(err);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
