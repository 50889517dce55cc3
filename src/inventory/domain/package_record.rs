use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One installed distribution as enumerated from the package metadata
/// registry, before its install directory has been resolved or sized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// Distribution name as registered in metadata (e.g. "requests").
    pub name: String,
    /// Version string as declared by the package; opaque to this tool.
    pub version: String,
    /// Root directory the distribution declares it is installed under,
    /// typically the site-packages directory itself.
    pub install_root: PathBuf,
}

impl Distribution {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        install_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            install_root: install_root.into(),
        }
    }
}

/// One discovered installed package with its computed disk footprint.
///
/// Records only exist for packages whose install directory was resolved
/// on disk at scan time; they live in memory for the duration of one
/// report generation and are never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    /// Sum of regular-file sizes under `location`, symlinks not followed.
    pub size_bytes: u64,
    /// Absolute path to the directory used for size computation.
    pub location: String,
}

impl PackageRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        size_bytes: u64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            size_bytes,
            location: location.into(),
        }
    }

    /// Package URL identifying this package in the PyPI ecosystem.
    pub fn purl(&self) -> String {
        format!("pkg:pypi/{}@{}", self.name, self.version)
    }
}
