use crate::inventory::domain::Distribution;
use crate::ports::outbound::PackageMetadataSource;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// SitePackagesMetadataSource adapter for Python environments
///
/// Implements the PackageMetadataSource port by enumerating the
/// `*.dist-info` and legacy `*.egg-info` directories directly under a
/// site-packages directory. The name and version come from the RFC 822
/// style headers in `METADATA` / `PKG-INFO`, falling back to the
/// directory stem when the metadata file is absent or incomplete.
pub struct SitePackagesMetadataSource {
    site_packages: PathBuf,
}

impl SitePackagesMetadataSource {
    pub fn new(site_packages: PathBuf) -> Self {
        Self { site_packages }
    }

    /// Resolves the site-packages directory for the current environment.
    ///
    /// Discovery order: an explicitly provided path, then the active
    /// virtual environment (`VIRTUAL_ENV`). No system-interpreter probing
    /// is attempted; without either source this is an error.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_dir() {
                return Err(InventoryError::SitePackagesNotFound {
                    path,
                    reason: "Not a directory".to_string(),
                }
                .into());
            }
            return Ok(Self::new(path));
        }

        if let Ok(venv) = std::env::var("VIRTUAL_ENV") {
            let venv = PathBuf::from(venv);
            if let Some(site_packages) = find_venv_site_packages(&venv) {
                return Ok(Self::new(site_packages));
            }
            return Err(InventoryError::SitePackagesNotFound {
                path: venv.join("lib"),
                reason: "No site-packages directory under the active virtual environment"
                    .to_string(),
            }
            .into());
        }

        Err(InventoryError::NoEnvironment.into())
    }

    pub fn site_packages(&self) -> &Path {
        &self.site_packages
    }
}

impl PackageMetadataSource for SitePackagesMetadataSource {
    fn distributions(&self) -> Result<Vec<Distribution>> {
        let entries = fs::read_dir(&self.site_packages).map_err(|e| {
            InventoryError::SitePackagesNotFound {
                path: self.site_packages.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut metadata_dirs: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_dir() && is_metadata_dir(p))
            .collect();

        // read_dir order is platform-dependent; sort so enumeration order
        // is deterministic across invocations.
        metadata_dirs.sort();

        let mut distributions = Vec::with_capacity(metadata_dirs.len());
        for dir in metadata_dirs {
            if let Some((name, version)) = read_distribution_identity(&dir) {
                distributions.push(Distribution::new(name, version, &self.site_packages));
            }
        }

        Ok(distributions)
    }
}

/// Locates `lib/python*/site-packages` (or `Lib/site-packages` on
/// Windows layouts) under a virtual environment root.
fn find_venv_site_packages(venv: &Path) -> Option<PathBuf> {
    let windows_layout = venv.join("Lib").join("site-packages");
    if windows_layout.is_dir() {
        return Some(windows_layout);
    }

    let lib = venv.join("lib");
    let mut python_dirs: Vec<PathBuf> = fs::read_dir(&lib)
        .ok()?
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.is_dir()
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("python"))
        })
        .collect();
    python_dirs.sort();

    python_dirs
        .into_iter()
        .map(|p| p.join("site-packages"))
        .find(|p| p.is_dir())
}

fn is_metadata_dir(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "dist-info" || e == "egg-info")
}

/// Extracts (name, version) for one metadata directory.
///
/// Prefers the Name/Version headers of the metadata file; either field
/// missing falls back to the `{name}-{version}` directory stem. Returns
/// `None` when the stem carries no version separator either, which is
/// not a valid installed distribution.
fn read_distribution_identity(dir: &Path) -> Option<(String, String)> {
    let metadata_file = if dir.extension().is_some_and(|e| e == "dist-info") {
        dir.join("METADATA")
    } else {
        dir.join("PKG-INFO")
    };

    let (mut name, mut version) = (None, None);
    if let Ok(content) = fs::read_to_string(&metadata_file) {
        for line in content.lines() {
            // Headers end at the first blank line; the body may contain
            // arbitrary text that must not be scanned.
            if line.is_empty() {
                break;
            }
            if let Some(value) = line.strip_prefix("Name:") {
                name.get_or_insert_with(|| value.trim().to_string());
            } else if let Some(value) = line.strip_prefix("Version:") {
                version.get_or_insert_with(|| value.trim().to_string());
            }
            if name.is_some() && version.is_some() {
                break;
            }
        }
    }

    match (name, version) {
        (Some(n), Some(v)) => Some((n, v)),
        (name, version) => {
            let stem = dir.file_stem()?.to_str()?;
            let (stem_name, stem_version) = stem.rsplit_once('-')?;
            Some((
                name.unwrap_or_else(|| stem_name.to_string()),
                version.unwrap_or_else(|| stem_version.to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_dist_info(root: &Path, dir_name: &str, metadata: Option<&str>) {
        let dir = root.join(dir_name);
        fs::create_dir(&dir).unwrap();
        if let Some(content) = metadata {
            let file = if dir_name.ends_with(".egg-info") {
                "PKG-INFO"
            } else {
                "METADATA"
            };
            fs::write(dir.join(file), content).unwrap();
        }
    }

    #[test]
    fn test_enumerates_dist_info_directories() {
        let sp = TempDir::new().unwrap();
        write_dist_info(
            sp.path(),
            "requests-2.31.0.dist-info",
            Some("Metadata-Version: 2.1\nName: requests\nVersion: 2.31.0\n\nHTTP library\n"),
        );
        write_dist_info(
            sp.path(),
            "numpy-1.26.4.dist-info",
            Some("Metadata-Version: 2.1\nName: numpy\nVersion: 1.26.4\n"),
        );
        fs::create_dir(sp.path().join("requests")).unwrap();

        let source = SitePackagesMetadataSource::new(sp.path().to_path_buf());
        let dists = source.distributions().unwrap();

        assert_eq!(dists.len(), 2);
        // Sorted by directory name: numpy before requests.
        assert_eq!(dists[0].name, "numpy");
        assert_eq!(dists[0].version, "1.26.4");
        assert_eq!(dists[1].name, "requests");
        assert_eq!(dists[1].install_root, sp.path());
    }

    #[test]
    fn test_enumerates_egg_info_directories() {
        let sp = TempDir::new().unwrap();
        write_dist_info(
            sp.path(),
            "legacy_pkg-0.9.1.egg-info",
            Some("Metadata-Version: 1.0\nName: legacy-pkg\nVersion: 0.9.1\n"),
        );

        let source = SitePackagesMetadataSource::new(sp.path().to_path_buf());
        let dists = source.distributions().unwrap();

        assert_eq!(dists.len(), 1);
        assert_eq!(dists[0].name, "legacy-pkg");
        assert_eq!(dists[0].version, "0.9.1");
    }

    #[test]
    fn test_falls_back_to_directory_stem() {
        let sp = TempDir::new().unwrap();
        write_dist_info(sp.path(), "orphan-3.2.dist-info", None);

        let source = SitePackagesMetadataSource::new(sp.path().to_path_buf());
        let dists = source.distributions().unwrap();

        assert_eq!(dists.len(), 1);
        assert_eq!(dists[0].name, "orphan");
        assert_eq!(dists[0].version, "3.2");
    }

    #[test]
    fn test_ignores_non_metadata_entries() {
        let sp = TempDir::new().unwrap();
        fs::create_dir(sp.path().join("plain_package")).unwrap();
        fs::write(sp.path().join("six.py"), "").unwrap();

        let source = SitePackagesMetadataSource::new(sp.path().to_path_buf());
        assert!(source.distributions().unwrap().is_empty());
    }

    #[test]
    fn test_missing_site_packages_is_an_error() {
        let sp = TempDir::new().unwrap();
        let missing = sp.path().join("gone");
        let source = SitePackagesMetadataSource::new(missing);
        assert!(source.distributions().is_err());
    }

    #[test]
    fn test_discover_with_explicit_path() {
        let sp = TempDir::new().unwrap();
        let source = SitePackagesMetadataSource::discover(Some(sp.path().to_path_buf())).unwrap();
        assert_eq!(source.site_packages(), sp.path());
    }

    #[test]
    fn test_discover_with_explicit_file_fails() {
        let sp = TempDir::new().unwrap();
        let file = sp.path().join("not-a-dir");
        fs::write(&file, "").unwrap();
        let result = SitePackagesMetadataSource::discover(Some(file));
        assert!(result.is_err());
    }

    #[test]
    fn test_find_venv_site_packages_unix_layout() {
        let venv = TempDir::new().unwrap();
        let sp = venv.path().join("lib").join("python3.12").join("site-packages");
        fs::create_dir_all(&sp).unwrap();

        assert_eq!(find_venv_site_packages(venv.path()), Some(sp));
    }

    #[test]
    fn test_find_venv_site_packages_windows_layout() {
        let venv = TempDir::new().unwrap();
        let sp = venv.path().join("Lib").join("site-packages");
        fs::create_dir_all(&sp).unwrap();

        assert_eq!(find_venv_site_packages(venv.path()), Some(sp));
    }
}
