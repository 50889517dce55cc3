mod package_record;
mod report_metadata;
mod stats;

pub use package_record::{Distribution, PackageRecord};
pub use report_metadata::ReportMetadata;
pub use stats::InventoryStats;
