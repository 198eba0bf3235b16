use serde::Serialize;

use crate::error::Result;

use super::{OutputFormatter, PointRecord};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    count: usize,
    points: &'a [PointRecord],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, records: &[PointRecord]) -> Result<String> {
        let output = JsonOutput {
            count: records.len(),
            points: records,
        };
        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    }
}
