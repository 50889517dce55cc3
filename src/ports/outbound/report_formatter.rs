use crate::inventory::domain::{PackageRecord, ReportMetadata};
use crate::shared::Result;

/// ReportFormatter port for rendering the inventory
///
/// This port abstracts the serialization logic for the supported report
/// formats (plain text, JSON envelope, CycloneDX SBOM, CSV).
pub trait ReportFormatter {
    /// Renders the record set into a complete report artifact
    ///
    /// # Arguments
    /// * `records` - Package records in Locator enumeration order
    /// * `metadata` - Generation timestamp, tool identity and serial number
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, records: &[PackageRecord], metadata: &ReportMetadata) -> Result<String>;
}
