/// Output format enumeration for report generation
///
/// Represents the supported report formats. It belongs in the
/// application layer as both the CLI (inbound adapter) and the
/// formatter factory (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable plain text table (default)
    Text,
    /// JSON document with a summary metadata envelope
    Json,
    /// CycloneDX 1.4 SBOM document
    CycloneDx,
    /// Plain tabular column dump
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "cyclonedx" | "sbom" => Ok(OutputFormat::CycloneDx),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'json', 'cyclonedx' or 'csv'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::CycloneDx => write!(f, "cyclonedx"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str_all_formats() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("cyclonedx").unwrap(),
            OutputFormat::CycloneDx
        );
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert_eq!(
            OutputFormat::from_str("sbom").unwrap(),
            OutputFormat::CycloneDx
        );
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert_eq!(
            OutputFormat::from_str("CycloneDX").unwrap(),
            OutputFormat::CycloneDx
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let result = OutputFormat::from_str("yaml");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("yaml"));
    }

    #[test]
    fn test_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::CycloneDx.to_string(), "cyclonedx");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
