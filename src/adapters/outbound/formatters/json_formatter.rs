use crate::inventory::domain::{InventoryStats, PackageRecord, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: JsonMetadata,
    packages: &'a [PackageRecord],
}

#[derive(Debug, Serialize)]
struct JsonMetadata {
    generated_at: String,
    total_packages: usize,
    total_size_bytes: u64,
    total_size_human: String,
}

/// JsonFormatter adapter for the machine-oriented JSON report
///
/// Emits a metadata envelope plus the records in Locator enumeration
/// order (not re-sorted), so the output round-trips back to the exact
/// input record set.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, records: &[PackageRecord], metadata: &ReportMetadata) -> Result<String> {
        let stats = InventoryStats::from_records(records);
        let report = JsonReport {
            metadata: JsonMetadata {
                generated_at: metadata.generated_at().to_string(),
                total_packages: stats.total_packages,
                total_size_bytes: stats.total_size_bytes,
                total_size_human: stats.total_size_human(),
            },
            packages: records,
        };

        serde_json::to_string_pretty(&report).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-06-01T12:00:00Z".to_string(),
            "pip-inventory".to_string(),
            "0.3.0".to_string(),
            "urn:uuid:test".to_string(),
        )
    }

    #[test]
    fn test_envelope_fields() {
        let records = vec![
            PackageRecord::new("requests", "2.31.0", 1024, "/sp/requests"),
            PackageRecord::new("numpy", "1.26.4", 2048, "/sp/numpy"),
        ];

        let output = JsonFormatter::new().format(&records, &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["metadata"]["generated_at"], "2024-06-01T12:00:00Z");
        assert_eq!(value["metadata"]["total_packages"], 2);
        assert_eq!(value["metadata"]["total_size_bytes"], 3072);
        assert_eq!(value["metadata"]["total_size_human"], "3.0 KiB");
    }

    #[test]
    fn test_packages_preserve_enumeration_order() {
        // Deliberately not name-sorted
        let records = vec![
            PackageRecord::new("zeta", "1.0", 0, "/sp/zeta"),
            PackageRecord::new("alpha", "1.0", 0, "/sp/alpha"),
        ];

        let output = JsonFormatter::new().format(&records, &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["packages"][0]["name"], "zeta");
        assert_eq!(value["packages"][1]["name"], "alpha");
    }

    #[test]
    fn test_round_trip_reproduces_records() {
        let records = vec![
            PackageRecord::new("requests", "2.31.0", 1024, "/sp/requests"),
            PackageRecord::new("numpy", "1.26.4", 2048, "/sp/numpy"),
        ];

        let output = JsonFormatter::new().format(&records, &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let parsed: Vec<PackageRecord> =
            serde_json::from_value(value["packages"].clone()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_empty_record_set() {
        let output = JsonFormatter::new().format(&[], &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["metadata"]["total_packages"], 0);
        assert_eq!(value["metadata"]["total_size_human"], "0 B");
        assert_eq!(value["packages"].as_array().unwrap().len(), 0);
    }
}
