use crate::inventory::domain::{PackageRecord, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::bytes::format_binary_size;
use crate::shared::Result;
use std::fmt::Write;

const RULE_WIDTH: usize = 72;

/// TextFormatter adapter for the human-oriented plain text report
///
/// Rows are sorted by package name case-insensitively ascending,
/// regardless of scan order.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, records: &[PackageRecord], metadata: &ReportMetadata) -> Result<String> {
        let mut sorted: Vec<&PackageRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.name.to_lowercase());

        let mut out = String::new();
        writeln!(out, "Installed Package Inventory")?;
        writeln!(out, "Generated: {}", metadata.generated_at())?;
        writeln!(out, "Package | Version | Size | Location")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

        for record in sorted {
            writeln!(
                out,
                "{} | {} | {} | {}",
                record.name,
                record.version,
                format_binary_size(record.size_bytes),
                record.location
            )?;
        }

        Ok(out)
    }
}
