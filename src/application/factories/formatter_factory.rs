use crate::adapters::outbound::formatters::{
    CsvFormatter, CycloneDxFormatter, JsonFormatter, TextFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating formatter instances from an output format
pub struct FormatterFactory;

impl FormatterFactory {
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::CycloneDx => Box::new(CycloneDxFormatter::new()),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
        }
    }

    /// Progress message shown on stderr before rendering starts
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text report...",
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::CycloneDx => "📝 Generating CycloneDX SBOM...",
            OutputFormat::Csv => "📝 Generating CSV export...",
        }
    }
}
