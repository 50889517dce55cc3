use crate::inventory::domain::{PackageRecord, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    name: String,
    version: String,
    purl: String,
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.4 JSON format
///
/// Each package becomes a `library` component identified by its PyPI
/// purl, with the computed size and location attached as component
/// properties.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_component(record: &PackageRecord) -> Component {
        Component {
            component_type: "library".to_string(),
            name: record.name.clone(),
            version: record.version.clone(),
            purl: record.purl(),
            properties: vec![
                Property {
                    name: "size".to_string(),
                    value: record.size_bytes.to_string(),
                },
                Property {
                    name: "location".to_string(),
                    value: record.location.clone(),
                },
            ],
        }
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CycloneDxFormatter {
    fn format(&self, records: &[PackageRecord], metadata: &ReportMetadata) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.4".to_string(),
            version: 1,
            serial_number: metadata.serial_number().to_string(),
            metadata: Metadata {
                timestamp: metadata.generated_at().to_string(),
                tools: vec![Tool {
                    name: metadata.tool_name().to_string(),
                    version: metadata.tool_version().to_string(),
                }],
            },
            components: records.iter().map(Self::build_component).collect(),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}
