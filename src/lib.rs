//! pip-inventory - Installed-package inventory and SBOM reports
//!
//! This library inventories the packages installed in a Python
//! environment, computes each package's on-disk footprint, and renders
//! the result as plain text, JSON, CSV or a CycloneDX SBOM. It is
//! read-only introspection: nothing is installed, modified or removed.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Package records, derived statistics
//!   and the install-directory sizing service
//! - **Application Layer** (`application`): Scan and render use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pip_inventory::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let source = SitePackagesMetadataSource::new(PathBuf::from(
//!     "/venv/lib/python3.12/site-packages",
//! ));
//! let scan = ScanPackagesUseCase::new(source, StderrProgressReporter::new());
//! let records = scan.execute()?;
//!
//! let render = RenderReportUseCase::new(StderrProgressReporter::new());
//! render.execute(&records, OutputFormat::CycloneDx, &StdoutPresenter::new())?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        CsvFormatter, CycloneDxFormatter, JsonFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::python::SitePackagesMetadataSource;
    pub use crate::application::dto::OutputFormat;
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{RenderReportUseCase, ScanPackagesUseCase};
    pub use crate::inventory::domain::{
        Distribution, InventoryStats, PackageRecord, ReportMetadata,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, PackageMetadataSource, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
