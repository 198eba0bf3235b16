use std::fmt::Write;

use crate::error::Result;
use crate::number::Number;

use super::{OutputFormatter, PointRecord};

/// Plain-text output.
///
/// Block mode prints one point per line with its distance from the origin.
/// Inline mode prints a bracketed list of renderings, `[<1, 1>, <3, 4>]`.
pub struct TextFormatter {
    inline: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(inline: bool) -> Self {
        Self { inline }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, records: &[PointRecord]) -> Result<String> {
        if self.inline {
            let rendered: Vec<&str> = records.iter().map(|r| r.rendered.as_str()).collect();
            return Ok(format!("[{}]\n", rendered.join(", ")));
        }

        let mut out = String::new();
        for record in records {
            let _ = writeln!(
                out,
                "{}  distance from origin: {}",
                record.rendered,
                Number::Float(record.distance_from_origin)
            );
        }
        Ok(out)
    }
}
