use crate::inventory::domain::{PackageRecord, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// CsvFormatter adapter for a plain tabular column dump
///
/// One row per record in Locator enumeration order; fields are quoted
/// only when they contain a delimiter, quote or newline.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, records: &[PackageRecord], _metadata: &ReportMetadata) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "name,version,size_bytes,location")?;
        for record in records {
            writeln!(
                out,
                "{},{},{},{}",
                escape_field(&record.name),
                escape_field(&record.version),
                record.size_bytes,
                escape_field(&record.location)
            )?;
        }
        Ok(out)
    }
}
