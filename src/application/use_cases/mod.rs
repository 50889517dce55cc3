mod render_report;
mod scan_packages;

pub use render_report::RenderReportUseCase;
pub use scan_packages::ScanPackagesUseCase;
