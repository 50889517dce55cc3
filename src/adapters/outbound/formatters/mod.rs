/// Formatter adapters for the supported report formats
mod csv_formatter;
mod cyclonedx_formatter;
mod json_formatter;
mod text_formatter;

pub use csv_formatter::CsvFormatter;
pub use cyclonedx_formatter::CycloneDxFormatter;
pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
