/// Python environment adapters for reading installed-package metadata
mod site_packages;

pub use site_packages::SitePackagesMetadataSource;
