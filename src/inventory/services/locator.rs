use crate::inventory::domain::Distribution;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolves the on-disk install directory for a distribution.
///
/// Tries, in order: the declared install root joined with the project
/// name with hyphens replaced by underscores, then the root joined with
/// the lowercase project name. Returns `None` when neither exists; such
/// packages contribute no record.
pub fn resolve_install_dir(dist: &Distribution) -> Option<PathBuf> {
    let underscored = dist.install_root.join(dist.name.replace('-', "_"));
    if underscored.exists() {
        return Some(underscored);
    }

    let lowercased = dist.install_root.join(dist.name.to_lowercase());
    if lowercased.exists() {
        return Some(lowercased);
    }

    None
}

/// Computes the total byte size of all regular files under `path`.
///
/// Symbolic links are not followed and only entries classified as
/// regular files are counted. Any traversal or metadata error aborts
/// the walk for this directory; the caller isolates the failure to the
/// owning package.
pub fn directory_size(path: &Path) -> Result<u64> {
    let mut total: u64 = 0;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", path.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to read metadata: {}", entry.path().display()))?;
        total = total.saturating_add(metadata.len());
    }

    Ok(total)
}
