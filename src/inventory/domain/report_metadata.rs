use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// ReportMetadata value object carried by every rendered report.
///
/// Generated fresh per render: the serial number is a random UUID urn,
/// unique per invocation and never derived from the record content.
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl ReportMetadata {
    /// Creates metadata with the current UTC timestamp and a fresh
    /// random serial number.
    pub fn generate() -> Self {
        Self::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            serial_number,
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}
